use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use access::PictureService;
use replies::{PictureEditRequest, PictureId};

use crate::errors::into_data;
use crate::hooks::use_services;
use crate::routes::Route;
use crate::shared::{ListErrors, RequireUser};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub id: PictureId,
}

fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_owned())
        .collect()
}

#[function_component(PictureEdit)]
pub fn picture_edit(props: &Props) -> Html {
    html! {
        <RequireUser>
            <PictureEditor id={props.id} />
        </RequireUser>
    }
}

#[function_component(PictureEditor)]
fn picture_editor(props: &Props) -> Html {
    let services = use_services();
    let navigator = use_navigator().unwrap();
    let form = use_state(PictureEditRequest::default);
    let tags = use_state(String::new);

    let can_edit = {
        let permissions = services.permissions.clone();
        let id = props.id;
        use_async_with_options(
            async move { Ok::<_, ()>(permissions.is_owner_or_admin(id).await) },
            UseAsyncOptions::enable_auto(),
        )
    };

    let picture = {
        let client = services.client.clone();
        let id = props.id;
        use_async_with_options(
            async move { into_data(client.picture_vo_by_id(id).await?) },
            UseAsyncOptions::enable_auto(),
        )
    };

    {
        let form = form.clone();
        let tags = tags.clone();
        use_effect_with_deps(
            move |picture| {
                if let Some(picture) = &picture.data {
                    form.set(picture.into());
                    tags.set(picture.tags.join(", "));
                }
                || ()
            },
            picture.clone(),
        );
    }

    let save = {
        let client = services.client.clone();
        let form = form.clone();
        let tags = tags.clone();
        use_async(async move {
            let request = PictureEditRequest {
                tags: parse_tags(&tags),
                ..(*form).clone()
            };
            into_data(client.edit_picture(&request).await?)
        })
    };

    {
        let id = props.id;
        use_effect_with_deps(
            move |save| {
                if save.data.is_some() {
                    navigator.push(&Route::PictureDetail { id });
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
            request.name = Some(input.value());
            form.set(request);
        })
    };
    let oninput_introduction = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut request = (*form).clone();
            request.introduction = Some(input.value());
            form.set(request);
        })
    };
    let oninput_category = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut request = (*form).clone();
            request.category = Some(input.value());
            form.set(request);
        })
    };
    let oninput_tags = {
        let tags = tags.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            tags.set(input.value());
        })
    };

    if can_edit.loading || can_edit.data.is_none() {
        return html! { <div class="busy">{ "Loading" }</div> };
    }

    if !can_edit.data.unwrap_or_default() {
        return html! { <div class="forbidden">{ "You may not edit this picture" }</div> };
    }

    html! {
        <div class="picture-edit-page">
            <h1>{ "Edit picture" }</h1>
            <ListErrors error={picture.error.clone()} />
            <ListErrors error={save.error.clone()} />
            <form {onsubmit}>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Name"
                        value={form.name.clone().unwrap_or_default()}
                        oninput={oninput_name}
                        />
                </fieldset>
                <fieldset class="form-group">
                    <textarea
                        class="form-control"
                        placeholder="Introduction"
                        value={form.introduction.clone().unwrap_or_default()}
                        oninput={oninput_introduction}
                        />
                </fieldset>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Category"
                        value={form.category.clone().unwrap_or_default()}
                        oninput={oninput_category}
                        />
                </fieldset>
                <fieldset class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Tags, comma separated"
                        value={(*tags).clone()}
                        oninput={oninput_tags}
                        />
                </fieldset>
                <button class="btn btn-primary" type="submit" disabled={save.loading}>
                    { "Save" }
                </button>
            </form>
        </div>
    }
}
