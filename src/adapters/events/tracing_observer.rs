//! Observer that writes each store change to the `tracing` log.

use tracing::info;

use crate::domain::poll::Poll;
use crate::ports::{ChangeKind, PollStoreChange, PollStoreObserver};

/// Logs one `info` line per change.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl PollStoreObserver for TracingObserver {
    fn on_change(&self, change: &PollStoreChange, polls: &[Poll]) {
        let index = match change.kind {
            ChangeKind::Inserted { index }
            | ChangeKind::Updated { index }
            | ChangeKind::Removed { index } => Some(index),
            ChangeKind::Reset => None,
        };
        info!(
            event_type = %change.event.event_type,
            event_id = %change.event.event_id,
            aggregate_id = %change.event.aggregate_id,
            index = ?index,
            polls = polls.len(),
            "poll board changed"
        );
    }

    fn name(&self) -> &'static str {
        "TracingObserver"
    }
}
