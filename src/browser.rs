//! Browser helpers for time and file download

use chrono::{DateTime, Utc};
use wasm_bindgen::{JsCast, JsValue};

/// Current time from the JS clock
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Offer `json` as a download named `file_name`.
pub fn download_json(file_name: &str, json: &str) -> Result<(), String> {
    download(file_name, json).map_err(|e| format!("{:?}", e))
}

fn download(file_name: &str, json: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into().map_err(JsValue::from)?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    web_sys::Url::revoke_object_url(&url)
}
