//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors, events)
//! - `poll` - Poll aggregate, tally, authoring flow and events

pub mod foundation;
pub mod poll;
