//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, event plumbing and error types
//! that form the vocabulary of the poll board.

mod errors;
mod events;
mod ids;
mod percentage;
mod poll_status;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use ids::PollId;
pub use percentage::Percentage;
pub use poll_status::PollStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
