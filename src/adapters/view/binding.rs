//! Routes store changes to a [`PollListView`].

use std::sync::Arc;

use crate::application::PollStore;
use crate::domain::poll::Poll;
use crate::ports::{ChangeKind, PollListView, PollStoreChange, PollStoreObserver};

/// Observer that keeps a list view in step with the store.
pub struct ListViewBinding<V: PollListView> {
    view: Arc<V>,
}

impl<V: PollListView + 'static> ListViewBinding<V> {
    pub fn new(view: Arc<V>) -> Self {
        Self { view }
    }

    /// Binds the current list to `view` and subscribes it to future changes.
    pub fn attach(store: &mut PollStore, view: Arc<V>) {
        view.reset(store.list());
        store.subscribe(Arc::new(Self::new(view)));
    }
}

impl<V: PollListView> PollStoreObserver for ListViewBinding<V> {
    fn on_change(&self, change: &PollStoreChange, polls: &[Poll]) {
        match change.kind {
            ChangeKind::Inserted { index } => match polls.get(index) {
                Some(poll) => self.view.bind(index, poll),
                None => self.view.reset(polls),
            },
            ChangeKind::Updated { index } => match polls.get(index) {
                Some(poll) => self.view.update(index, poll),
                None => self.view.reset(polls),
            },
            ChangeKind::Removed { index } => self.view.remove(index),
            ChangeKind::Reset => self.view.reset(polls),
        }
    }

    fn name(&self) -> &'static str {
        "ListViewBinding"
    }
}
