use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use access::PictureService;
use replies::{format_size, PictureId};

use crate::errors::into_data;
use crate::hooks::use_user_context;
use crate::routes::Route;
use crate::shared::{ListErrors, Username};
use crate::utils::download_image;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub id: PictureId,
}

#[function_component(PictureDetail)]
pub fn picture_detail(props: &Props) -> Html {
    let user_ctx = use_user_context();
    let picture = {
        let client = user_ctx.services().client.clone();
        let id = props.id;
        use_async(async move { into_data(client.picture_vo_by_id(id).await?) })
    };
    let can_edit = {
        let permissions = user_ctx.services().permissions.clone();
        let user_ctx = user_ctx.clone();
        let id = props.id;
        use_async(async move {
            let allowed = permissions.is_owner_or_admin(id).await;
            user_ctx.sync();
            Ok::<_, ()>(allowed)
        })
    };

    {
        let picture = picture.clone();
        let can_edit = can_edit.clone();
        use_effect_with_deps(
            move |_| {
                picture.run();
                can_edit.run();
                || ()
            },
            props.id,
        );
    }

    let ondownload = {
        let picture = picture.data.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(picture) = &picture {
                download_image(picture.url.as_deref(), Some(&picture.file_name()));
            }
        })
    };

    let editable = can_edit.data.unwrap_or_default();

    html! {
        <div class="picture-page">
            <ListErrors error={picture.error.clone()} />
            if picture.loading {
                <div class="busy">{ "Loading" }</div>
            }
            if let Some(p) = &picture.data {
                <>
                    <div class="picture">
                        <img src={p.url.clone().unwrap_or_default()} alt={p.name.clone().unwrap_or_default()} />
                    </div>
                    <div class="picture-info">
                        <h1>{ p.name.clone().unwrap_or_default() }</h1>
                        <p class="introduction">{ p.introduction.clone().unwrap_or_default() }</p>
                        <dl>
                            <dt>{ "Uploader" }</dt>
                            <dd>
                                <Link<Route> to={Route::UserCenter { id: p.user_id }}>
                                    <Username id={Some(p.user_id)} />
                                </Link<Route>>
                            </dd>
                            <dt>{ "Category" }</dt>
                            <dd>{ p.category.clone().unwrap_or_default() }</dd>
                            <dt>{ "Tags" }</dt>
                            <dd>{ p.tags.join(", ") }</dd>
                            <dt>{ "Format" }</dt>
                            <dd>{ p.pic_format.clone().unwrap_or_default() }</dd>
                            <dt>{ "Dimensions" }</dt>
                            <dd>{ format!("{} x {}", p.pic_width.unwrap_or_default(), p.pic_height.unwrap_or_default()) }</dd>
                            <dt>{ "Size" }</dt>
                            <dd>{ format_size(p.pic_size) }</dd>
                        </dl>
                        <div class="actions">
                            <button class="btn" onclick={ondownload}>{ "Download" }</button>
                            if editable {
                                <Link<Route> to={Route::PictureEdit { id: p.id }} classes={classes!("btn")}>
                                    { "Edit" }
                                </Link<Route>>
                            }
                        </div>
                    </div>
                </>
            }
        </div>
    }
}
