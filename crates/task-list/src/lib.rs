//! Task List Core
//!
//! Platform-independent state for the single-list tracker: the task sequence,
//! the pending-removal state machine, HTML escaping, count summaries and the
//! JSON storage codec. The browser frontend wraps this crate; everything here
//! runs natively so it can be tested with plain `cargo test`.

mod config;
mod escape;
mod id;
mod list;
mod snapshot;
mod storage;
mod summary;
mod task;
mod tracker;

pub use config::TrackerConfig;
pub use escape::{escape_html, unescape_html};
pub use id::TaskId;
pub use list::{RemovalTicket, TaskError, TaskList};
pub use snapshot::{export_snapshot, snapshot_file_name};
pub use storage::{decode_tasks, encode_tasks, MemoryStore, StorageError, TaskRepository, TaskStore};
pub use summary::Summary;
pub use task::Task;
pub use tracker::Tracker;
