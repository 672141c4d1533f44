//! PollStoreObserver port - Change notification for the poll store.
//!
//! This port is the only integration point between the store and whatever
//! renders it. The store calls every subscribed observer synchronously, in
//! subscription order, after a mutation has been applied.

use crate::domain::foundation::EventEnvelope;
use crate::domain::poll::Poll;

/// Which list position a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A poll was inserted at `index` (always 0 for new polls).
    Inserted { index: usize },
    /// The poll at `index` changed in place (selection or vote).
    Updated { index: usize },
    /// The poll previously at `index` is gone.
    Removed { index: usize },
    /// The whole list was replaced.
    Reset,
}

/// Notification delivered to observers.
#[derive(Debug, Clone)]
pub struct PollStoreChange {
    pub kind: ChangeKind,
    /// Domain event describing the mutation.
    pub event: EventEnvelope,
}

impl PollStoreChange {
    pub fn new(kind: ChangeKind, event: EventEnvelope) -> Self {
        Self { kind, event }
    }
}

/// Observer of poll store changes.
///
/// Implementations should be quick: they run inline with the mutation that
/// triggered them. They receive the post-change list as a read view.
///
/// # Example
///
/// ```ignore
/// struct Redraw;
///
/// impl PollStoreObserver for Redraw {
///     fn on_change(&self, change: &PollStoreChange, polls: &[Poll]) {
///         println!("{} -> {} polls", change.event.event_type, polls.len());
///     }
///
///     fn name(&self) -> &'static str {
///         "Redraw"
///     }
/// }
/// ```
pub trait PollStoreObserver: Send + Sync {
    /// Handle one change.
    fn on_change(&self, change: &PollStoreChange, polls: &[Poll]);

    /// Observer name for logging.
    fn name(&self) -> &'static str;
}
