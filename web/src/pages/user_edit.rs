use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use access::UserService;
use replies::{UserId, UserRole, UserUpdateRequest};

use crate::errors::{into_data, Error};
use crate::hooks::use_user_context;
use crate::routes::Route;
use crate::services::Services;
use crate::shared::{ListErrors, RequireUser};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub id: UserId,
    pub admin: bool,
}

/// Profile editing, `admin` switches to the administrator's form which may
/// also change the role.
#[function_component(UserEdit)]
pub fn user_edit(props: &Props) -> Html {
    html! {
        <RequireUser admin={props.admin}>
            <UserEditor id={props.id} admin={props.admin} />
        </RequireUser>
    }
}

/// `/user/get` is for administrators only, everybody else starts from the
/// session user.
async fn load_request(
    services: Services,
    id: UserId,
    admin: bool,
) -> Result<UserUpdateRequest, Error> {
    if !admin {
        return Ok(UserUpdateRequest::from(&services.store.login_user()));
    }

    let user = into_data(services.client.user_by_id(id).await?)?;

    Ok(UserUpdateRequest {
        user_role: Some(user.user_role),
        ..UserUpdateRequest::from(&user)
    })
}

#[function_component(UserEditor)]
fn user_editor(props: &Props) -> Html {
    let user_ctx = use_user_context();
    let navigator = use_navigator().unwrap();
    let form = use_state(UserUpdateRequest::default);

    let user = {
        let services = user_ctx.services().clone();
        let id = props.id;
        let admin = props.admin;
        use_async_with_options(
            load_request(services, id, admin),
            UseAsyncOptions::enable_auto(),
        )
    };

    {
        let form = form.clone();
        use_effect_with_deps(
            move |user| {
                if let Some(request) = &user.data {
                    form.set(request.clone());
                }
                || ()
            },
            user.clone(),
        );
    }

    let save = {
        let client = user_ctx.services().client.clone();
        let form = form.clone();
        let admin = props.admin;
        use_async(async move { into_data(client.update_user(&form, admin).await?) })
    };

    {
        let id = props.id;
        use_effect_with_deps(
            move |save| {
                if save.data.is_some() {
                    navigator.push(&Route::UserCenter { id });
                }
                || ()
            },
            save.clone(),
        );
    }

    let onsubmit = {
        let save = save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.run();
        })
    };
    let oninput_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut request = (*form).clone();
            request.user_name = Some(input.value());
            form.set(request);
        })
    };
    let oninput_avatar = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut request = (*form).clone();
            request.user_avatar = Some(input.value());
            form.set(request);
        })
    };
    let oninput_profile = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut request = (*form).clone();
            request.user_profile = Some(input.value());
            form.set(request);
        })
    };
    let onchange_admin = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut request = (*form).clone();
            request.user_role = Some(if input.checked() {
                UserRole::Admin
            } else {
                UserRole::User
            });
            form.set(request);
        })
    };

    if !user_ctx.may_edit_user(props.id) {
        return html! { <div class="forbidden">{ "You may only edit your own profile" }</div> };
    }

    html! {
        <div class="user-edit-page">
            <h1>{ "Edit profile" }</h1>
            <ListErrors error={user.error.clone()} />
            <ListErrors error={save.error.clone()} />
            <form {onsubmit}>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Name"
                        value={form.user_name.clone().unwrap_or_default()}
                        oninput={oninput_name}
                        />
                </fieldset>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Avatar URL"
                        value={form.user_avatar.clone().unwrap_or_default()}
                        oninput={oninput_avatar}
                        />
                </fieldset>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Profile"
                        value={form.user_profile.clone().unwrap_or_default()}
                        oninput={oninput_profile}
                        />
                </fieldset>
                if props.admin {
                    <fieldset class="form-group">
                        <label>
                            <input
                                type="checkbox"
                                checked={form.user_role.map(|r| r.is_admin()).unwrap_or_default()}
                                onchange={onchange_admin}
                                />
                            { "Administrator" }
                        </label>
                    </fieldset>
                }
                <button class="btn btn-primary" type="submit" disabled={save.loading}>
                    { "Save" }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use client::DEFAULT_API_ROOT;
    use replies::LoginUserVo;

    use super::*;

    #[test]
    pub fn it_should_seed_self_edits_from_session_user() -> Result<()> {
        let services = Services::new(DEFAULT_API_ROOT)?;
        services.store.set_login_user(LoginUserVo {
            id: 7,
            user_name: Some("dana".to_owned()),
            user_role: UserRole::Admin,
            ..LoginUserVo::anonymous()
        });

        let request = futures::executor::block_on(load_request(services, 7, false))?;

        assert_eq!(request.id, 7);
        assert_eq!(request.user_name.as_deref(), Some("dana"));
        assert_eq!(request.user_role, None);

        Ok(())
    }
}
