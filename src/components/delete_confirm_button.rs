//! Delete Confirm Button Component
//!
//! Inline two-step confirmation for destructive toolbar actions.

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, shows `prompt` with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while awaiting confirmation
/// * `disabled` - Disables the initial button (e.g. nothing to delete)
/// * `on_confirm` - Callback to execute when user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="toolbar-btn danger"
                disabled=move || disabled.get()
                on:click=move |_| set_confirming.set(true)
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm" role="group">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    aria-label="Confirm"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    aria-label="Cancel"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
