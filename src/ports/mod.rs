//! Ports - Interfaces between the poll store and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and its collaborators. Adapters implement these ports.
//!
//! - `PollStoreObserver` - Change notification after every store mutation
//! - `PollListView` - Presentation contract (reset / bind / update / remove)

mod poll_list_view;
mod poll_store_observer;

pub use poll_list_view::PollListView;
pub use poll_store_observer::{ChangeKind, PollStoreChange, PollStoreObserver};
