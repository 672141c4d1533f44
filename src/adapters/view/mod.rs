//! Presentation adapters implementing the `PollListView` contract.

mod binding;
mod text;

pub use binding::ListViewBinding;
pub use text::TextPollView;
