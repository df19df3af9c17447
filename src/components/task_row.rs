//! Task Row Component
//!
//! One list entry: completion checkbox, text, delete button.

use leptos::prelude::*;
use task_list::Task;

use crate::context::TrackerContext;

/// Enter and Space activate the custom checkbox
fn is_activation_key(ev: &web_sys::KeyboardEvent) -> bool {
    matches!(ev.key().as_str(), "Enter" | " ")
}

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = expect_context::<TrackerContext>();

    let id = task.id.clone();
    let completed = task.completed;
    // Rendered as a text node, never as markup
    let text = task.display_text();

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("task");
            if completed {
                c.push_str(" completed");
            }
            if ctx.is_pending_removal(&id) {
                c.push_str(" removing");
            }
            c
        }
    };

    let toggle = {
        let id = id.clone();
        move || ctx.toggle_task(&id)
    };
    let toggle_on_key = toggle.clone();

    let delete = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| ctx.delete_task(id.clone())
    };

    let check_label = format!(
        "{}: {}",
        if completed { "Mark as incomplete" } else { "Mark as complete" },
        text
    );
    let delete_label = format!("Delete task: {}", text);

    view! {
        <li class=row_class data-task-id=id.to_string() role="listitem">
            <div
                class="checkbox"
                role="checkbox"
                tabindex="0"
                aria-checked=if completed { "true" } else { "false" }
                aria-label=check_label
                on:click=move |_| toggle()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if is_activation_key(&ev) {
                        ev.prevent_default();
                        toggle_on_key();
                    }
                }
            >
                {if completed { "✓" } else { "" }}
            </div>
            <span class="task-text">{text}</span>
            <button class="delete-btn" aria-label=delete_label on:click=delete>
                "🗑️"
            </button>
        </li>
    }
}
