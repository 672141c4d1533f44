//! Poll aggregate entity.
//!
//! A poll is a question with at least two options. It starts open, may hold a
//! provisional selection, and closes for good on its first vote.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PollId, PollStatus, StateMachine, Timestamp};

use super::{PollError, PollOption, PollResults};

/// Minimum number of usable options a poll needs to be votable.
pub const MIN_OPTIONS: usize = 2;

/// Poll aggregate.
///
/// # Invariants
///
/// - `question` is non-empty
/// - `options` holds at least [`MIN_OPTIONS`] entries, in authoring order
/// - a closed poll never changes again: no vote, no selection
/// - `selected_index` is `None` once closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    id: PollId,
    question: String,
    description: Option<String>,
    link: Option<String>,
    options: Vec<PollOption>,
    status: PollStatus,
    selected_index: Option<usize>,
    created_at: Timestamp,
}

impl Poll {
    /// Create a new open poll.
    ///
    /// Question, description and link are trimmed; a blank description or
    /// link becomes `None`. Blank option labels are dropped before counting.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the question is empty
    /// - `ValidationFailed` if fewer than two usable options remain
    pub fn new<I, S>(
        question: &str,
        description: Option<&str>,
        link: Option<&str>,
        options: I,
    ) -> Result<Self, PollError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = question.trim();
        if question.is_empty() {
            return Err(PollError::validation("question", "Poll name is required"));
        }

        let options = usable_options(options)?;

        Ok(Self {
            id: PollId::new(),
            question: question.to_string(),
            description: non_blank(description),
            link: non_blank(link),
            options,
            status: PollStatus::Open,
            selected_index: None,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a poll from known state (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PollId,
        question: String,
        description: Option<String>,
        link: Option<String>,
        options: Vec<PollOption>,
        status: PollStatus,
        selected_index: Option<usize>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            question,
            description,
            link,
            options,
            status,
            selected_index,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PollId {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    pub fn status(&self) -> PollStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        !self.status.is_open()
    }

    /// Returns the provisional, not yet committed choice.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_option(&self) -> Option<&PollOption> {
        self.selected_index.and_then(|i| self.options.get(i))
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tally
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of all option votes.
    ///
    /// Widened to `u64` so full per-option counters cannot overflow it.
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|option| u64::from(option.votes())).sum()
    }

    /// Index of the option with the most votes.
    ///
    /// Scans left to right and only moves on a strictly greater count, so a
    /// tie goes to the lowest index. A poll without votes reports 0.
    pub fn winning_index(&self) -> usize {
        let mut winner = 0;
        let mut max: Option<u32> = None;
        for (i, option) in self.options.iter().enumerate() {
            if max.map_or(true, |m| option.votes() > m) {
                max = Some(option.votes());
                winner = i;
            }
        }
        winner
    }

    /// Snapshot of the current tally.
    pub fn results(&self) -> PollResults {
        PollResults::from_poll(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record a provisional choice. Votes are not touched.
    ///
    /// # Errors
    ///
    /// - `AlreadyClosed` if the poll has been voted on
    /// - `InvalidIndex` if `index` is not an option
    pub fn select_option(&mut self, index: usize) -> Result<(), PollError> {
        self.ensure_open()?;
        self.ensure_option(index)?;

        self.selected_index = Some(index);
        Ok(())
    }

    /// Cast the single vote this poll accepts.
    ///
    /// Increments the chosen option, closes the poll and clears the
    /// selection in one step.
    ///
    /// # Errors
    ///
    /// - `AlreadyClosed` if the poll has been voted on
    /// - `InvalidIndex` if `index` is not an option
    /// - `VoteLimitReached` if the option's counter is full (poll stays open)
    pub fn cast_vote(&mut self, index: usize) -> Result<PollResults, PollError> {
        self.ensure_open()?;
        self.ensure_option(index)?;
        let closed = self.status.transition_to(PollStatus::Closed)?;

        self.options[index]
            .record_vote()
            .ok_or(PollError::VoteLimitReached { index })?;
        self.status = closed;
        self.selected_index = None;
        Ok(self.results())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_open(&self) -> Result<(), PollError> {
        if self.status.is_open() {
            Ok(())
        } else {
            Err(PollError::AlreadyClosed)
        }
    }

    fn ensure_option(&self, index: usize) -> Result<(), PollError> {
        if index < self.options.len() {
            Ok(())
        } else {
            Err(PollError::invalid_index(index, self.options.len()))
        }
    }
}

/// Trims option labels, drops blank ones and enforces the minimum count.
fn usable_options<I, S>(labels: I) -> Result<Vec<PollOption>, PollError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options: Vec<PollOption> = labels
        .into_iter()
        .filter_map(|label| PollOption::new(label.as_ref()).ok())
        .collect();

    if options.len() < MIN_OPTIONS {
        return Err(PollError::validation(
            "options",
            "Enter at least two options",
        ));
    }
    Ok(options)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
