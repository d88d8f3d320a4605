use yew::prelude::*;

use crate::errors::Error;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub error: Option<Error>,
}

#[function_component(ListErrors)]
pub fn list_errors(props: &Props) -> Html {
    if let Some(error) = &props.error {
        html! {
            <ul class="error-messages">
                <li>{ error.to_string() }</li>
            </ul>
        }
    } else {
        html! {}
    }
}
