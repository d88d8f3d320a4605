use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Asks the browser to save `url`, nothing happens without one.
pub fn download_image(url: Option<&str>, file_name: Option<&str>) {
    let url = match url {
        Some(url) if !url.is_empty() => url,
        _ => return,
    };

    if let Err(e) = save_as(url, file_name.unwrap_or_default()) {
        log::warn!("download-image: {:?}", e);
    }
}

fn save_as(url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;

    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();

    Ok(())
}
