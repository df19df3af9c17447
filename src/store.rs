//! Application State Store
//!
//! Uses Leptos reactive_stores so the list, the counts and the notification
//! toast each re-render only when their own field changes.

use leptos::prelude::*;
use reactive_stores::Store;
use task_list::{StorageError, Tracker, TrackerConfig};

use crate::storage::BrowserStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

impl NoticeLevel {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
        }
    }
}

/// Transient on-screen message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Identifies this notice so timers armed for an older one do nothing
    pub serial: u64,
    pub message: String,
    pub level: NoticeLevel,
    pub fading: bool,
}

/// Page-lifetime state, constructed once by `App`
#[derive(Debug, Store)]
pub struct AppState {
    pub tracker: Tracker<BrowserStorage>,
    pub notice: Option<Notice>,
    pub notice_serial: u64,
}

impl AppState {
    pub fn open(config: &TrackerConfig) -> Self {
        Self {
            tracker: Tracker::open(BrowserStorage, config.storage_key.clone()),
            notice: None,
            notice_serial: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Run a tracker mutation and collect any save failure it caused.
pub fn store_mutate<R>(
    store: &AppStore,
    f: impl FnOnce(&mut Tracker<BrowserStorage>) -> R,
) -> (R, Option<StorageError>) {
    let tracker_field = store.tracker();
    let mut tracker = tracker_field.write();
    let result = f(&mut *tracker);
    let save_error = tracker.take_save_error();
    (result, save_error)
}

/// Show `message`, replacing any current notice. Returns its serial.
pub fn store_show_notice(store: &AppStore, message: String, level: NoticeLevel) -> u64 {
    let serial = {
        let serial_field = store.notice_serial();
        let mut serial = serial_field.write();
        *serial += 1;
        *serial
    };
    *store.notice().write() = Some(Notice {
        serial,
        message,
        level,
        fading: false,
    });
    serial
}

pub fn store_fade_notice(store: &AppStore, serial: u64) {
    if let Some(notice) = store.notice().write().as_mut().filter(|n| n.serial == serial) {
        notice.fading = true;
    }
}

pub fn store_clear_notice(store: &AppStore, serial: u64) {
    let notice_field = store.notice();
    let mut notice = notice_field.write();
    if notice.as_ref().is_some_and(|n| n.serial == serial) {
        *notice = None;
    }
}
