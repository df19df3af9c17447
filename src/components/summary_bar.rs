//! Summary Bar Component

use leptos::prelude::*;

use crate::context::TrackerContext;

/// Total and completed counts
#[component]
pub fn SummaryBar() -> impl IntoView {
    let ctx = expect_context::<TrackerContext>();

    view! {
        <div class="stats" aria-live="polite">
            <span id="task-count">{move || ctx.summary().total_label()}</span>
            <span id="completed-count">{move || ctx.summary().completed_label()}</span>
        </div>
    }
}
