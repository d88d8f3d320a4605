use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::hooks::{use_user_context, UserContext};
use crate::routes::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub children: Children,
    #[prop_or_default]
    pub admin: bool,
}

/// Renders children for logged in users, administrators only when `admin`.
#[function_component(RequireUser)]
pub fn require_user(props: &Props) -> Html {
    let navigator = use_navigator().unwrap();
    let user_ctx = use_user_context();

    use_effect_with_deps(
        move |(user,)| {
            if matches!(**user, UserContext::Anonymous) {
                navigator.push(&Route::Login);
            }
            || ()
        },
        (user_ctx.clone(),),
    );

    match &*user_ctx {
        UserContext::Initializing => html! { <div class="busy">{ "Loading" }</div> },
        UserContext::User(user) if props.admin && !user.is_admin() => {
            html! { <div class="forbidden">{ "Administrators only" }</div> }
        }
        UserContext::User(_) => html! { for props.children.iter() },
        UserContext::Anonymous => html! {},
    }
}
