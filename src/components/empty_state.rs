use leptos::prelude::*;

use crate::context::TrackerContext;

/// Placeholder shown only while the list is empty
#[component]
pub fn EmptyState() -> impl IntoView {
    let ctx = expect_context::<TrackerContext>();

    view! {
        <div
            id="empty-state"
            class="empty-state"
            style:display=move || if ctx.is_empty() { "block" } else { "none" }
        >
            <p>"No tasks yet. Add one above to get started!"</p>
        </div>
    }
}
