//! Console Logger
//!
//! Routes `log` records from the core crate and the UI to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", short_target(record.target()), record.args());
        let line: wasm_bindgen::JsValue = line.into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `task_list::tracker` -> `TRACKER`
fn short_target(target: &str) -> String {
    target.rsplit("::").next().unwrap_or(target).to_uppercase()
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        web_sys::console::debug_1(&"[LOG] Logger already installed".into());
    }
    log::set_max_level(level);
}
