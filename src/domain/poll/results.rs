//! Read-only tally of a poll, as shown on a closed poll card.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, PollId};

use super::Poll;

/// Per-option line of a tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionResult {
    pub label: String,
    pub votes: u32,
    /// Share of all votes, rounded to a whole percent.
    pub share: Percentage,
    pub is_winner: bool,
}

/// Snapshot of a poll's tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResults {
    pub poll_id: PollId,
    pub total_votes: u64,
    pub winning_index: usize,
    pub options: Vec<OptionResult>,
}

impl PollResults {
    pub fn from_poll(poll: &Poll) -> Self {
        let total_votes = poll.total_votes();
        let winning_index = poll.winning_index();
        let options = poll
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| OptionResult {
                label: option.label().to_string(),
                votes: option.votes(),
                share: Percentage::of(u64::from(option.votes()), total_votes),
                is_winner: i == winning_index,
            })
            .collect();

        Self {
            poll_id: *poll.id(),
            total_votes,
            winning_index,
            options,
        }
    }

    /// Label of the winning option ("Final Vote").
    pub fn winner_label(&self) -> Option<&str> {
        self.options
            .get(self.winning_index)
            .map(|option| option.label.as_str())
    }
}
