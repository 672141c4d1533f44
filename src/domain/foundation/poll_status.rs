//! PollStatus enum for tracking whether a poll still accepts a vote.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a poll.
///
/// Valid transitions:
/// - Open -> Closed
///
/// Closed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PollStatus {
    #[default]
    Open,
    Closed,
}

impl PollStatus {
    /// Returns true if the poll accepts a selection or a vote.
    pub fn is_open(&self) -> bool {
        matches!(self, PollStatus::Open)
    }
}

impl StateMachine for PollStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PollStatus::*;
        matches!((self, target), (Open, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            PollStatus::Open => vec![PollStatus::Closed],
            PollStatus::Closed => vec![],
        }
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PollStatus::Open => "Open",
            PollStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}
