use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_user_context;

#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let user_ctx = use_user_context();
    let client = user_ctx.services().client.clone();

    let logout = move |_| {
        let client = client.clone();
        let user_ctx = user_ctx.clone();
        spawn_local(async move {
            if let Err(e) = client.logout().await {
                log::warn!("logout: {}", e);
            }
            user_ctx.logout();
        });
    };

    html! {
        <div class="logout" onclick={logout}>{ "Logout" }</div>
    }
}
