use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use access::UserService;
use replies::UserId;

use crate::errors::into_data;
use crate::hooks::use_user_context;
use crate::routes::Route;
use crate::shared::{ListErrors, Username};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub id: UserId,
}

#[function_component(UserCenter)]
pub fn user_center(props: &Props) -> Html {
    let user_ctx = use_user_context();
    let user = {
        let client = user_ctx.services().client.clone();
        let id = props.id;
        use_async(async move { into_data(client.user_by_id(id).await?) })
    };

    {
        let user = user.clone();
        use_effect_with_deps(
            move |_| {
                user.run();
                || ()
            },
            props.id,
        );
    }

    let edit = if user_ctx.is_admin() {
        Some(Route::AdminUserEdit { id: props.id })
    } else if user_ctx.may_edit_user(props.id) {
        Some(Route::UserEdit { id: props.id })
    } else {
        None
    };

    html! {
        <div class="user-center-page">
            <h1><Username id={Some(props.id)} /></h1>
            <ListErrors error={user.error.clone()} />
            if let Some(u) = &user.data {
                <div class="profile">
                    if let Some(avatar) = &u.user_avatar {
                        <img class="avatar" src={avatar.clone()} />
                    }
                    <p>{ u.user_profile.clone().unwrap_or_default() }</p>
                    <p class="joined">{ u.create_time.clone().unwrap_or_default() }</p>
                </div>
            }
            if let Some(route) = edit {
                <Link<Route> to={route} classes={classes!("btn")}>{ "Edit profile" }</Link<Route>>
            }
        </div>
    }
}
