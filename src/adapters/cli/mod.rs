//! Interactive shell adapter used by the `poll-board` binary.

mod command;

pub use command::{parse_draft, Command};
