use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::errors::into_data;
use crate::hooks::*;
use crate::shared::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct LoginInfo {
    account: String,
    password: String,
}

#[function_component(Login)]
pub fn login_page() -> Html {
    let user_ctx = use_user_context();
    let login_info = use_state(LoginInfo::default);
    let user_login = {
        let login_info = login_info.clone();
        let client = user_ctx.services().client.clone();
        use_async(async move {
            let response = client
                .login(&login_info.account, &login_info.password)
                .await?;
            into_data(response)
        })
    };

    use_effect_with_deps(
        move |user_login| {
            if let Some(user) = &user_login.data {
                user_ctx.login(user.clone());
            }
            || ()
        },
        user_login.clone(),
    );

    let onsubmit = {
        let user_login = user_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default(); /* Prevent event propagation */
            user_login.run();
        })
    };
    let oninput_account = {
        let login_info = login_info.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut info = (*login_info).clone();
            info.account = input.value();
            login_info.set(info);
        })
    };
    let oninput_password = {
        let login_info = login_info.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut info = (*login_info).clone();
            info.password = input.value();
            login_info.set(info);
        })
    };

    html! {
        <div class="auth-page">
            <h1>{ "Sign in" }</h1>
            <ListErrors error={user_login.error.clone()} />
            <form {onsubmit}>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Account"
                        value={login_info.account.clone()}
                        oninput={oninput_account}
                        />
                </fieldset>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="password"
                        placeholder="Password"
                        value={login_info.password.clone()}
                        oninput={oninput_password}
                        />
                </fieldset>
                <button
                    class="btn btn-primary"
                    type="submit"
                    disabled={user_login.loading}>
                    { "Sign in" }
                </button>
            </form>
        </div>
    }
}
