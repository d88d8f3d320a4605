use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{ "Page not found" }</h1>
            <Link<Route> to={Route::Home}>{ "Back home" }</Link<Route>>
        </div>
    }
}
