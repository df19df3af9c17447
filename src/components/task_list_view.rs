//! Task List View Component
//!
//! Rebuilds the visible list from the tracker after every mutation.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::TrackerContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = expect_context::<TrackerContext>();
    let store = ctx.store;

    let tasks = move || store.tracker().read().tasks().to_vec();

    view! {
        <ul
            id="tasks"
            class="task-list"
            role="list"
            style:display=move || if ctx.is_empty() { "none" } else { "block" }
        >
            <For
                each=tasks
                // Rows are static per render; key on every field they show
                key=|task| (task.id.clone(), task.completed, task.text.clone())
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
