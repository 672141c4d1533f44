//! Poll domain events.
//!
//! Events produced by the poll store after a successful mutation:
//! - `PollCreated` - New poll added to the front of the board
//! - `PollOptionSelected` - Provisional choice changed on an open poll
//! - `VoteCast` - The single vote of a poll was cast; the poll is now closed
//! - `PollRemoved` - Poll deleted from the board
//! - `PollBoardCleared` - Every poll dropped at session end

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, PollId, Timestamp};

use super::PollResults;

// ════════════════════════════════════════════════════════════════════════════
// PollCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a poll is authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollCreated {
    pub event_id: EventId,
    pub poll_id: PollId,
    pub question: String,
    pub options: Vec<String>,
    pub created_at: Timestamp,
}

domain_event!(
    PollCreated,
    event_type = "poll.created.v1",
    schema_version = 1,
    aggregate_id = poll_id,
    aggregate_type = "Poll",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PollOptionSelected
// ════════════════════════════════════════════════════════════════════════════

/// Published when the provisional choice of an open poll changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOptionSelected {
    pub event_id: EventId,
    pub poll_id: PollId,
    pub option_index: usize,
    pub selected_at: Timestamp,
}

domain_event!(
    PollOptionSelected,
    event_type = "poll.option_selected.v1",
    schema_version = 1,
    aggregate_id = poll_id,
    aggregate_type = "Poll",
    occurred_at = selected_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// VoteCast
// ════════════════════════════════════════════════════════════════════════════

/// Published when a poll receives its vote and closes.
///
/// Carries the final tally so observers can render results directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteCast {
    pub event_id: EventId,
    pub poll_id: PollId,
    pub option_index: usize,
    pub results: PollResults,
    pub cast_at: Timestamp,
}

domain_event!(
    VoteCast,
    event_type = "poll.vote_cast.v1",
    schema_version = 1,
    aggregate_id = poll_id,
    aggregate_type = "Poll",
    occurred_at = cast_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PollRemoved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a poll is deleted from the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollRemoved {
    pub event_id: EventId,
    pub poll_id: PollId,
    pub removed_at: Timestamp,
}

domain_event!(
    PollRemoved,
    event_type = "poll.removed.v1",
    schema_version = 1,
    aggregate_id = poll_id,
    aggregate_type = "Poll",
    occurred_at = removed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PollBoardCleared
// ════════════════════════════════════════════════════════════════════════════

/// Published when the whole board is emptied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollBoardCleared {
    pub event_id: EventId,
    /// The board has no identity of its own; this is the literal "board".
    pub board: String,
    pub removed_count: usize,
    pub cleared_at: Timestamp,
}

domain_event!(
    PollBoardCleared,
    event_type = "poll.board_cleared.v1",
    schema_version = 1,
    aggregate_id = board,
    aggregate_type = "PollBoard",
    occurred_at = cleared_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// Unit Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};
    use crate::domain::poll::Poll;

    #[test]
    fn poll_created_envelope_routes_by_type() {
        let poll_id = PollId::new();
        let event = PollCreated {
            event_id: EventId::new(),
            poll_id,
            question: "Poll : Lunch".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            created_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        assert_eq!(envelope.event_type, "poll.created.v1");
        assert_eq!(envelope.aggregate_type, "Poll");
        assert_eq!(envelope.aggregate_id, poll_id.to_string());
        assert_eq!(envelope.payload["options"][1], "B");
    }

    #[test]
    fn vote_cast_carries_results() {
        let mut poll = Poll::new("Q", None, None, ["A", "B"]).unwrap();
        let results = poll.cast_vote(1).unwrap();
        let event = VoteCast {
            event_id: EventId::new(),
            poll_id: *poll.id(),
            option_index: 1,
            results,
            cast_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        let back: VoteCast = envelope.payload_as().unwrap();
        assert_eq!(back.results.total_votes, 1);
        assert_eq!(back.results.winning_index, 1);
        assert_eq!(event.schema_version(), 1);
    }

    #[test]
    fn board_cleared_uses_board_aggregate() {
        let event = PollBoardCleared {
            event_id: EventId::new(),
            board: "board".to_string(),
            removed_count: 3,
            cleared_at: Timestamp::now(),
        };
        assert_eq!(event.aggregate_id(), "board");
        assert_eq!(event.aggregate_type(), "PollBoard");
    }
}
