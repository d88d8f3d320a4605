use yew::prelude::*;
use yew_hooks::prelude::*;

use replies::UserId;

use crate::hooks::use_services;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub id: Option<UserId>,
}

/// Shows a user's name, looked up once per id for the life of the app.
#[function_component(Username)]
pub fn username(props: &Props) -> Html {
    let services = use_services();
    let name = {
        let usernames = services.usernames.clone();
        let id = props.id;
        use_async(async move { Ok::<_, ()>(usernames.resolve(id).await) })
    };

    {
        let name = name.clone();
        use_effect_with_deps(
            move |_| {
                name.run();
                || ()
            },
            props.id,
        );
    }

    html! {
        <span class="username">{ name.data.clone().unwrap_or_default() }</span>
    }
}
