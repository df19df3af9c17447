//! Page Configuration
//!
//! An optional `<script id="tracker-config" type="application/json">` element
//! in the host page overrides [`TrackerConfig`] defaults.

use task_list::TrackerConfig;

const CONFIG_ELEMENT_ID: &str = "tracker-config";

pub fn load_page_config() -> TrackerConfig {
    let Some(raw) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return TrackerConfig::default();
    };

    match TrackerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFIG] Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e).into());
            TrackerConfig::default()
        }
    }
}
