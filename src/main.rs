//! To-Do Tracker Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod browser;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::load_page_config();
    logging::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
