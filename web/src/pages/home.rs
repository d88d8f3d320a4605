use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use replies::PictureId;

use crate::hooks::{use_user_context, UserContext};
use crate::routes::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let user_ctx = use_user_context();
    let navigator = use_navigator().unwrap();
    let picture_id = use_state(String::new);

    let oninput = {
        let picture_id = picture_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            picture_id.set(input.value());
        })
    };

    let onsubmit = {
        let picture_id = picture_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match picture_id.trim().parse::<PictureId>() {
                Ok(id) => navigator.push(&Route::PictureDetail { id }),
                Err(_) => log::warn!("home: invalid picture id {:?}", *picture_id),
            }
        })
    };

    let greeting = match &*user_ctx {
        UserContext::User(user) => format!("Welcome back, {}", user.display_name()),
        _ => "Welcome".to_owned(),
    };

    html! {
        <div class="home-page">
            <h1>{ greeting }</h1>
            <form {onsubmit}>
                <input
                    class="form-control"
                    type="text"
                    placeholder="Picture id"
                    value={(*picture_id).clone()}
                    {oninput}
                    />
                <button class="btn btn-primary" type="submit">{ "Open" }</button>
            </form>
        </div>
    }
}
