//! Toolbar Component
//!
//! Bulk actions: clear completed, clear all (confirmed inline), JSON export.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::TrackerContext;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = expect_context::<TrackerContext>();

    let nothing_completed = Signal::derive(move || ctx.summary().completed == 0);
    let list_empty = Signal::derive(move || ctx.is_empty());

    view! {
        <div class="toolbar">
            <button
                class="toolbar-btn"
                disabled=move || nothing_completed.get()
                on:click=move |_| ctx.clear_completed()
            >
                "Clear completed"
            </button>
            <DeleteConfirmButton
                label="Clear all"
                prompt="Delete all tasks?"
                disabled=list_empty
                on_confirm=Callback::new(move |_| ctx.clear_all())
            />
            <button class="toolbar-btn" on:click=move |_| ctx.export_tasks()>
                "Export JSON"
            </button>
        </div>
    }
}
