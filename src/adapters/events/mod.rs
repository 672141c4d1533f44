//! Observer adapters for store change notifications.

mod in_memory;
mod tracing_observer;

pub use in_memory::RecordingObserver;
pub use tracing_observer::TracingObserver;
