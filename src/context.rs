//! Tracker Context
//!
//! The operations components invoke, provided via Leptos Context API.
//! Every mutation goes through the store so the list, counts and storage
//! stay in step.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use task_list::{snapshot_file_name, StorageError, Summary, TaskId, TrackerConfig};

use crate::browser;
use crate::store::AppStateStoreFields;
use crate::store::{
    store_clear_notice, store_fade_notice, store_mutate, store_show_notice, AppStore, NoticeLevel,
};

const STORAGE_FULL_MESSAGE: &str = "Storage full! Please delete some tasks.";

#[derive(Clone, Copy)]
pub struct TrackerContext {
    pub store: AppStore,
    /// The new-task input, refocused after each add
    pub input_ref: NodeRef<Input>,
    removal_delay_ms: u32,
    notification_ms: u32,
    notification_fade_ms: u32,
}

impl TrackerContext {
    pub fn new(store: AppStore, input_ref: NodeRef<Input>, config: &TrackerConfig) -> Self {
        Self {
            store,
            input_ref,
            removal_delay_ms: config.removal_delay_ms,
            notification_ms: config.notification_ms,
            notification_fade_ms: config.notification_fade_ms,
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn summary(&self) -> Summary {
        self.store.tracker().read().summary()
    }

    pub fn is_empty(&self) -> bool {
        self.store.tracker().read().list().is_empty()
    }

    pub fn is_pending_removal(&self, id: &TaskId) -> bool {
        self.store.tracker().read().is_pending_removal(id)
    }

    // ========================
    // Operations
    // ========================

    /// Add a task from raw input. Returns false for blank input.
    pub fn add_task(&self, raw_text: &str) -> bool {
        let now = browser::now();
        let id = TaskId::generate(now, js_sys::Math::random());
        let (added, save_error) = store_mutate(&self.store, |tracker| tracker.add(raw_text, id, now));
        self.report_save_error(save_error);
        added.is_some()
    }

    pub fn toggle_task(&self, id: &TaskId) {
        let (_, save_error) = store_mutate(&self.store, |tracker| tracker.toggle(id));
        self.report_save_error(save_error);
    }

    /// Mark the task as removing; it leaves the list once the delay elapses.
    pub fn delete_task(&self, id: TaskId) {
        let requested = self.store.tracker().write().request_removal(&id);
        let Ok(ticket) = requested else {
            return;
        };

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.removal_delay_ms).await;
            let (_, save_error) = store_mutate(&ctx.store, |tracker| tracker.complete_removal(&ticket));
            ctx.report_save_error(save_error);
        });
    }

    pub fn clear_completed(&self) {
        let (removed, save_error) = store_mutate(&self.store, |tracker| tracker.clear_completed());
        log::info!("Cleared {} completed tasks", removed);
        self.report_save_error(save_error);
    }

    pub fn clear_all(&self) {
        let (removed, save_error) = store_mutate(&self.store, |tracker| tracker.clear_all());
        log::info!("Cleared all {} tasks", removed);
        self.report_save_error(save_error);
    }

    /// Download the current list as a JSON file.
    pub fn export_tasks(&self) {
        let snapshot = self.store.tracker().read_untracked().export();
        let result = snapshot
            .map_err(|e| e.to_string())
            .and_then(|json| browser::download_json(&snapshot_file_name(browser::now()), &json));
        if let Err(e) = result {
            log::warn!("Export failed: {}", e);
            self.notify("Export failed.", NoticeLevel::Warning);
        }
    }

    /// Show a toast that fades out after the configured time.
    pub fn notify(&self, message: impl Into<String>, level: NoticeLevel) {
        let serial = store_show_notice(&self.store, message.into(), level);
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.notification_ms).await;
            store_fade_notice(&ctx.store, serial);
            TimeoutFuture::new(ctx.notification_fade_ms).await;
            store_clear_notice(&ctx.store, serial);
        });
    }

    pub fn focus_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            let _ = input.focus();
        }
    }

    /// Final write on page hide or unmount.
    pub fn teardown(&self) {
        let Some(tracker) = self.store.tracker().try_read_untracked() else {
            return;
        };
        match tracker.flush() {
            Ok(()) => log::info!("Tracker closed with {} tasks", tracker.tasks().len()),
            Err(e) => log::warn!("Final save failed: {}", e),
        }
    }

    /// Quota failures reach the user; everything else was already logged.
    fn report_save_error(&self, save_error: Option<StorageError>) {
        if save_error.is_some_and(|e| e.is_quota_exceeded()) {
            self.notify(STORAGE_FULL_MESSAGE, NoticeLevel::Warning);
        }
    }
}
