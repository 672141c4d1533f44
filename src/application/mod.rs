//! Application layer - The poll store that orchestrates domain operations.
//!
//! The store is the aggregate root of a session: it owns the polls, applies
//! every mutation through the domain types, and notifies observers through
//! the `PollStoreObserver` port.

mod poll_store;

pub use poll_store::PollStore;
