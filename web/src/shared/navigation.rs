use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_user_context, UserContext};
use crate::routes::Route;
use crate::shared::LogoutButton;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let user_ctx = use_user_context();

    let session = match &*user_ctx {
        UserContext::Initializing => html! {},
        UserContext::Anonymous => html! {
            <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
        },
        UserContext::User(user) => html! {
            <>
                <Link<Route> to={Route::UserCenter { id: user.id }}>
                    { user.display_name().to_owned() }
                </Link<Route>>
                <LogoutButton />
            </>
        },
    };

    html! {
        <nav class="navigation">
            <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
            if user_ctx.is_admin() {
                <Link<Route> to={Route::UserManage}>{ "Users" }</Link<Route>>
            }
            <Link<Route> to={Route::About}>{ "About" }</Link<Route>>
            <div class="session">{ session }</div>
        </nav>
    }
}
