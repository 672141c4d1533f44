//! In-memory observer that records every store change.
//!
//! Provides deterministic capture of notifications for assertions and for
//! callers that want to replay what happened during a session.
//!
//! # Note
//!
//! Uses `.expect()` on lock operations which will panic if locks are
//! poisoned. The store is single-threaded, so poisoning only follows a panic
//! inside this adapter.

use std::sync::RwLock;

use crate::domain::foundation::EventEnvelope;
use crate::domain::poll::Poll;
use crate::ports::{ChangeKind, PollStoreChange, PollStoreObserver};

/// Observer that keeps every change it receives.
///
/// # Example
///
/// ```ignore
/// let recorder = Arc::new(RecordingObserver::new());
/// store.subscribe(recorder.clone());
///
/// store.create_poll("Lunch?", None, None, ["Burger", "Hotdog"])?;
///
/// assert_eq!(recorder.event_count(), 1);
/// assert!(recorder.has_event("poll.created.v1"));
/// ```
pub struct RecordingObserver {
    changes: RwLock<Vec<PollStoreChange>>,
}

impl RecordingObserver {
    /// Creates an observer with nothing recorded.
    pub fn new() -> Self {
        Self {
            changes: RwLock::new(Vec::new()),
        }
    }

    /// Returns all recorded changes in delivery order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn changes(&self) -> Vec<PollStoreChange> {
        self.changes
            .read()
            .expect("RecordingObserver: changes lock poisoned")
            .clone()
    }

    /// Returns the change kinds in delivery order.
    pub fn kinds(&self) -> Vec<ChangeKind> {
        self.changes().into_iter().map(|c| c.kind).collect()
    }

    /// Returns all recorded event envelopes.
    pub fn events(&self) -> Vec<EventEnvelope> {
        self.changes().into_iter().map(|c| c.event).collect()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific poll.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Returns count of recorded changes.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn event_count(&self) -> usize {
        self.changes
            .read()
            .expect("RecordingObserver: changes lock poisoned")
            .len()
    }

    /// Checks if a specific event type was recorded.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.changes
            .read()
            .expect("RecordingObserver: changes lock poisoned")
            .iter()
            .any(|c| c.event.event_type == event_type)
    }

    /// Forgets everything recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.changes
            .write()
            .expect("RecordingObserver: changes write lock poisoned")
            .clear();
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PollStoreObserver for RecordingObserver {
    fn on_change(&self, change: &PollStoreChange, _polls: &[Poll]) {
        self.changes
            .write()
            .expect("RecordingObserver: changes write lock poisoned")
            .push(change.clone());
    }

    fn name(&self) -> &'static str {
        "RecordingObserver"
    }
}
