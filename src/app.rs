//! To-Do Tracker App
//!
//! Owns the page-lifetime state: constructs the store on mount, provides the
//! tracker context to all children, and flushes storage when the page is
//! hidden or the app is unmounted.

use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;
use reactive_stores::Store;
use task_list::TrackerConfig;

use crate::components::{EmptyState, NewTaskForm, NotificationToast, SummaryBar, TaskListView, Toolbar};
use crate::context::TrackerContext;
use crate::store::AppState;

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::open(&config));
    let input_ref = NodeRef::<Input>::new();
    let ctx = TrackerContext::new(store, input_ref, &config);

    log::info!("Mounted with storage key '{}'", config.storage_key);

    // Provide context to all children
    provide_context(ctx);

    // The mounted root is never disposed, so pagehide is the reliable last write
    let pagehide = window_event_listener(ev::pagehide, move |_| ctx.teardown());
    on_cleanup(move || {
        pagehide.remove();
        ctx.teardown();
    });

    view! {
        <main class="todo-app">
            <h1>"To-Do List"</h1>

            <NewTaskForm />

            <SummaryBar />

            <TaskListView />
            <EmptyState />

            <Toolbar />

            <NotificationToast />
        </main>
    }
}
