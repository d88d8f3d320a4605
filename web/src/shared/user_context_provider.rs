//! User context provider.

use yew::prelude::*;
use yew_hooks::prelude::*;

use access::ApiError;

use crate::hooks::{use_services, UserContext};
use crate::services::{api_root, Services};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Creates the app's [`Services`] and publishes the session user.
#[function_component(UserContextProvider)]
pub fn user_context_provider(props: &Props) -> Html {
    let services = use_memo(|_| Services::new(api_root()), ());

    match &*services {
        Ok(services) => html! {
            <ContextProvider<Services> context={services.clone()}>
                <SessionContext>
                    { for props.children.iter() }
                </SessionContext>
            </ContextProvider<Services>>
        },
        Err(e) => {
            log::error!("user-context: {}", e);
            html! { <div class="fatal">{ format!("Unable to reach the server: {}", e) }</div> }
        }
    }
}

#[function_component(SessionContext)]
fn session_context(props: &Props) -> Html {
    let services = use_services();
    let user_ctx = use_state(UserContext::default);
    let current_user = {
        let store = services.store.clone();
        use_async(async move {
            store.fetch_login_user().await?;
            Ok::<_, ApiError>(store.login_user())
        })
    };

    {
        let current_user = current_user.clone();
        use_mount(move || {
            log::info!("user-context: refreshing");
            current_user.run();
        });
    }

    {
        let user_ctx = user_ctx.clone();
        use_effect_with_deps(
            move |current_user| {
                if let Some(user) = &current_user.data {
                    log::info!("user-context: ok!");
                    user_ctx.set(user.clone().into());
                }

                if let Some(error) = &current_user.error {
                    log::info!("user-context: error {:?}", error);
                    user_ctx.set(UserContext::Anonymous);
                }
                || ()
            },
            current_user,
        )
    }

    html! {
        <ContextProvider<UseStateHandle<UserContext>> context={user_ctx}>
            { for props.children.iter() }
        </ContextProvider<UseStateHandle<UserContext>>>
    }
}
