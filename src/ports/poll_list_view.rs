//! PollListView port - Contract a rendering layer implements to follow the board.
//!
//! The store never talks to a view directly. A [`crate::adapters::ListViewBinding`]
//! subscribes to the store and translates changes into these calls.

use crate::domain::poll::Poll;

/// A list-shaped view of the board.
///
/// Positions are list indices at the time of the call; front is the most
/// recently created poll. Open and closed polls are expected to render
/// differently (choices vs. results) and `Poll::is_closed` tells which.
pub trait PollListView: Send + Sync {
    /// Rebind every row from scratch.
    fn reset(&self, polls: &[Poll]);

    /// A new row appeared at `index`.
    fn bind(&self, index: usize, poll: &Poll);

    /// The row at `index` must be redrawn.
    fn update(&self, index: usize, poll: &Poll);

    /// The row at `index` was deleted; later rows shift up by one.
    fn remove(&self, index: usize);
}
