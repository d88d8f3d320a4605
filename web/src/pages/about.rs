use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <h1>{ "About" }</h1>
            <p>{ "Browse, upload and manage pictures." }</p>
        </div>
    }
}
