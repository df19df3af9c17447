//! Notification Toast Component

use leptos::prelude::*;

use crate::context::TrackerContext;
use crate::store::AppStateStoreFields;

/// Renders the current notice, if any. Timing lives in `TrackerContext::notify`.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = expect_context::<TrackerContext>();
    let store = ctx.store;

    move || {
        store.notice().read().as_ref().map(|notice| {
            let class = format!(
                "notification {}{}",
                notice.level.class(),
                if notice.fading { " fading" } else { "" }
            );
            let message = notice.message.clone();
            view! {
                <div class=class role="status" aria-live="polite">{message}</div>
            }
        })
    }
}
