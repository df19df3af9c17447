//! UI Components
//!
//! Leptos components for the task tracker page.

mod delete_confirm_button;
mod empty_state;
mod new_task_form;
mod notification_toast;
mod summary_bar;
mod task_list_view;
mod task_row;
mod toolbar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use empty_state::EmptyState;
pub use new_task_form::NewTaskForm;
pub use notification_toast::NotificationToast;
pub use summary_bar::SummaryBar;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use toolbar::Toolbar;
