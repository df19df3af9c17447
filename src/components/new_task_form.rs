//! New Task Form Component

use leptos::prelude::*;

use crate::context::TrackerContext;

/// Text input plus Add button. Enter submits the form.
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = expect_context::<TrackerContext>();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
            // Keep the cursor in the input for rapid entry
            ctx.focus_input();
        }
    };

    view! {
        <form id="todo-form" class="todo-form" on:submit=add_task>
            <input
                id="task-input"
                type="text"
                placeholder="What needs to be done?"
                aria-label="New task"
                autocomplete="off"
                autofocus=true
                node_ref=ctx.input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
