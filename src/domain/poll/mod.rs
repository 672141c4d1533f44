//! Poll domain module.
//!
//! A poll is a question with two or more options. It accepts a provisional
//! selection while open and closes for good on its single vote.
//!
//! # Events
//!
//! - `PollCreated` - Published when a poll is authored
//! - `PollOptionSelected` - Published when the provisional choice changes
//! - `VoteCast` - Published when the poll receives its vote and closes
//! - `PollRemoved` - Published when a poll is deleted
//! - `PollBoardCleared` - Published when the board is emptied

mod aggregate;
mod draft;
mod errors;
mod events;
mod option;
mod results;
pub mod seed;

pub use aggregate::{Poll, MIN_OPTIONS};
pub use draft::{PollDraft, DEFAULT_QUESTION_PREFIX};
pub use errors::PollError;
pub use events::{PollBoardCleared, PollCreated, PollOptionSelected, PollRemoved, VoteCast};
pub use option::PollOption;
pub use results::{OptionResult, PollResults};
