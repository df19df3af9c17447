//! Browser Storage
//!
//! [`TaskStore`] over `window.localStorage`. The handle is looked up on every
//! access, so the type carries no JS state and can live in the reactive store.

use task_list::{StorageError, TaskStore};
use wasm_bindgen::{JsCast, JsValue};

/// DOMException names browsers use for a full storage area
const QUOTA_ERROR_NAMES: &[&str] = &["QuotaExceededError", "NS_ERROR_DOM_QUOTA_REACHED"];

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TaskStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(describe(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(classify_write_error)
    }
}

fn classify_write_error(err: JsValue) -> StorageError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if QUOTA_ERROR_NAMES.contains(&ex.name().as_str()) => StorageError::QuotaExceeded,
        _ => StorageError::Write(describe(&err)),
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(ex) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", ex.name(), ex.message());
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
