use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::ExportError;

fn browser_err(context: &str, e: impl std::fmt::Debug) -> ExportError {
    ExportError::Browser(format!("{}: {:?}", context, e))
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| browser_err("Failed to create blob", e))
}

/// Save `content` through a temporary download link
pub fn download(content: &str, mime: &str, filename: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Browser("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("No document object".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("No body element".into()))?;

    let blob = create_blob(content, mime)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_err("Failed to create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser_err("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser_err("Failed to cast to anchor", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| browser_err("Failed to set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| browser_err("Failed to append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| browser_err("Failed to remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| browser_err("Failed to revoke URL", e))?;
    Ok(())
}

/// Open an HTML document in a new tab; the document prints itself once loaded.
///
/// The object URL is not revoked: the new tab still has to load it.
pub fn open_for_print(html: &str, mime: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Browser("No window object".into()))?;
    let blob = create_blob(html, mime)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_err("Failed to create object URL", e))?;

    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ExportError::Browser("Popup blocked".into())),
        Err(e) => Err(browser_err("Failed to open print window", e)),
    }
}
