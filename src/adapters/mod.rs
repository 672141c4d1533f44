//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Observers that record or log store changes
//! - `view` - `PollListView` binding and a plain-text renderer
//! - `cli` - Command parsing for the interactive shell

pub mod cli;
pub mod events;
pub mod view;

pub use events::{RecordingObserver, TracingObserver};
pub use view::{ListViewBinding, TextPollView};
