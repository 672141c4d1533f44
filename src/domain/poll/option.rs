//! A single answer of a poll and its vote counter.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One selectable answer of a poll.
///
/// Votes only ever grow; the counter is bumped by the owning poll when a
/// vote is cast and never touched otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    label: String,
    votes: u32,
}

impl PollOption {
    /// Creates an option with no votes.
    ///
    /// The label is trimmed and must not be empty.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("option"));
        }
        Ok(Self {
            label: trimmed.to_string(),
            votes: 0,
        })
    }

    /// Reconstitutes an option with an existing tally (seed data).
    pub fn with_votes(label: impl Into<String>, votes: u32) -> Result<Self, ValidationError> {
        let mut option = Self::new(label)?;
        option.votes = votes;
        Ok(option)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn votes(&self) -> u32 {
        self.votes
    }

    /// Adds one vote and returns the new count.
    ///
    /// Returns `None` and leaves the counter untouched when it is full.
    pub(super) fn record_vote(&mut self) -> Option<u32> {
        self.votes = self.votes.checked_add(1)?;
        Some(self.votes)
    }
}
