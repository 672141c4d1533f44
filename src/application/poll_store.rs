//! PollStore - The session-scoped board of polls.
//!
//! The store owns every poll, keeps them newest-first, and is the only
//! mutating entry point. After each successful mutation it builds the
//! matching domain event and notifies every observer with the post-change
//! list. Rejected operations change nothing and notify nobody.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::foundation::{EventEnvelope, EventId, SerializableDomainEvent, Timestamp};
use crate::domain::poll::{
    Poll, PollBoardCleared, PollCreated, PollDraft, PollError, PollOptionSelected, PollRemoved,
    PollResults, VoteCast,
};
use crate::ports::{ChangeKind, PollStoreChange, PollStoreObserver};

/// Ordered collection of polls, front = most recently created.
pub struct PollStore {
    polls: Vec<Poll>,
    observers: Vec<Arc<dyn PollStoreObserver>>,
}

impl Default for PollStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PollStore {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::with_polls(Vec::new())
    }

    /// Creates a board holding `polls` in the given order. No notification
    /// is sent; observers subscribed later see the seed through `list()`.
    pub fn with_polls(polls: Vec<Poll>) -> Self {
        Self {
            polls,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are called in subscription order.
    pub fn subscribe(&mut self, observer: Arc<dyn PollStoreObserver>) {
        debug!(observer = observer.name(), "observer subscribed");
        self.observers.push(observer);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read view
    // ─────────────────────────────────────────────────────────────────────────

    /// Current polls, newest first.
    pub fn list(&self) -> &[Poll] {
        &self.polls
    }

    pub fn get(&self, index: usize) -> Option<&Poll> {
        self.polls.get(index)
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create an open poll and put it at the front of the board.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the question is blank
    /// - `ValidationFailed` if fewer than two non-blank options are given
    pub fn create_poll<I, S>(
        &mut self,
        question: &str,
        description: Option<&str>,
        link: Option<&str>,
        options: I,
    ) -> Result<&Poll, PollError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let poll = Poll::new(question, description, link, options)?;
        Ok(self.insert_front(poll))
    }

    /// Run the authoring flow on `draft` and put the poll at the front.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the draft has no name or too few options
    pub fn create_from_draft(
        &mut self,
        draft: &PollDraft,
        question_prefix: &str,
    ) -> Result<&Poll, PollError> {
        let poll = draft.finish(question_prefix)?;
        Ok(self.insert_front(poll))
    }

    /// Delete the poll at `index`.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` if there is no poll at `index`
    pub fn remove_poll(&mut self, index: usize) -> Result<(), PollError> {
        self.ensure_poll(index)?;
        let poll = self.polls.remove(index);
        debug!(poll_id = %poll.id(), index, "poll removed");

        let event = PollRemoved {
            event_id: EventId::new(),
            poll_id: *poll.id(),
            removed_at: Timestamp::now(),
        };
        self.notify(ChangeKind::Removed { index }, event.to_envelope());
        Ok(())
    }

    /// Record a provisional choice on the poll at `poll_index`.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` if either index is out of range
    /// - `AlreadyClosed` if the poll was already voted on
    pub fn select_option(&mut self, poll_index: usize, option_index: usize) -> Result<(), PollError> {
        let poll = self.poll_mut(poll_index)?;
        poll.select_option(option_index)?;
        debug!(poll_id = %poll.id(), option_index, "option selected");

        let event = PollOptionSelected {
            event_id: EventId::new(),
            poll_id: *poll.id(),
            option_index,
            selected_at: Timestamp::now(),
        };
        self.notify(ChangeKind::Updated { index: poll_index }, event.to_envelope());
        Ok(())
    }

    /// Cast the single vote of the poll at `poll_index` and close it.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` if either index is out of range
    /// - `AlreadyClosed` if the poll was already voted on
    /// - `VoteLimitReached` if the option's counter is full
    pub fn cast_vote(
        &mut self,
        poll_index: usize,
        option_index: usize,
    ) -> Result<PollResults, PollError> {
        let poll = self.poll_mut(poll_index)?;
        let results = poll.cast_vote(option_index)?;
        debug!(
            poll_id = %poll.id(),
            option_index,
            total_votes = results.total_votes,
            "vote cast, poll closed"
        );

        let event = VoteCast {
            event_id: EventId::new(),
            poll_id: *poll.id(),
            option_index,
            results: results.clone(),
            cast_at: Timestamp::now(),
        };
        self.notify(ChangeKind::Updated { index: poll_index }, event.to_envelope());
        Ok(results)
    }

    /// Cast the vote for the option currently selected on the poll.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` if there is no poll at `poll_index`
    /// - `AlreadyClosed` if the poll was already voted on
    /// - `NothingSelected` if no option has been selected yet
    pub fn submit_vote(&mut self, poll_index: usize) -> Result<PollResults, PollError> {
        let poll = self.poll(poll_index)?;
        if poll.is_closed() {
            return Err(PollError::AlreadyClosed);
        }
        let option_index = poll.selected_index().ok_or(PollError::NothingSelected)?;
        self.cast_vote(poll_index, option_index)
    }

    /// Drop every poll (session end).
    pub fn clear(&mut self) {
        let removed_count = self.polls.len();
        self.polls.clear();
        debug!(removed_count, "board cleared");

        let event = PollBoardCleared {
            event_id: EventId::new(),
            board: "board".to_string(),
            removed_count,
            cleared_at: Timestamp::now(),
        };
        self.notify(ChangeKind::Reset, event.to_envelope());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn insert_front(&mut self, poll: Poll) -> &Poll {
        debug!(poll_id = %poll.id(), options = poll.options().len(), "poll created");
        let event = PollCreated {
            event_id: EventId::new(),
            poll_id: *poll.id(),
            question: poll.question().to_string(),
            options: poll
                .options()
                .iter()
                .map(|option| option.label().to_string())
                .collect(),
            created_at: *poll.created_at(),
        };

        self.polls.insert(0, poll);
        self.notify(ChangeKind::Inserted { index: 0 }, event.to_envelope());
        &self.polls[0]
    }

    fn ensure_poll(&self, index: usize) -> Result<(), PollError> {
        if index < self.polls.len() {
            Ok(())
        } else {
            Err(PollError::invalid_index(index, self.polls.len()))
        }
    }

    fn poll(&self, index: usize) -> Result<&Poll, PollError> {
        let len = self.polls.len();
        self.polls
            .get(index)
            .ok_or_else(|| PollError::invalid_index(index, len))
    }

    fn poll_mut(&mut self, index: usize) -> Result<&mut Poll, PollError> {
        let len = self.polls.len();
        self.polls
            .get_mut(index)
            .ok_or_else(|| PollError::invalid_index(index, len))
    }

    fn notify(&self, kind: ChangeKind, event: EventEnvelope) {
        let change = PollStoreChange::new(kind, event);
        for observer in &self.observers {
            trace!(
                observer = observer.name(),
                event_type = %change.event.event_type,
                "notifying observer"
            );
            observer.on_change(&change, &self.polls);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poll::seed;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingObserver {
        changes: Mutex<Vec<(ChangeKind, String, usize)>>,
    }

    impl CapturingObserver {
        fn changes(&self) -> Vec<(ChangeKind, String, usize)> {
            self.changes.lock().unwrap().clone()
        }
    }

    impl PollStoreObserver for CapturingObserver {
        fn on_change(&self, change: &PollStoreChange, polls: &[Poll]) {
            self.changes
                .lock()
                .unwrap()
                .push((change.kind, change.event.event_type.clone(), polls.len()));
        }

        fn name(&self) -> &'static str {
            "CapturingObserver"
        }
    }

    fn observed_store() -> (PollStore, Arc<CapturingObserver>) {
        let observer = Arc::new(CapturingObserver::default());
        let mut store = PollStore::new();
        store.subscribe(observer.clone());
        (store, observer)
    }

    // Creation tests

    #[test]
    fn create_poll_prepends_open_poll() {
        let (mut store, observer) = observed_store();
        store.create_poll("First", None, None, ["A", "B"]).unwrap();
        let second = store
            .create_poll("Second", None, None, ["C", "D"])
            .unwrap()
            .question()
            .to_string();

        assert_eq!(second, "Second");
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].question(), "Second");
        assert_eq!(store.list()[1].question(), "First");
        assert!(!store.list()[0].is_closed());
        assert_eq!(
            observer.changes(),
            vec![
                (ChangeKind::Inserted { index: 0 }, "poll.created.v1".to_string(), 1),
                (ChangeKind::Inserted { index: 0 }, "poll.created.v1".to_string(), 2),
            ]
        );
    }

    #[test]
    fn rejected_create_does_not_notify() {
        let (mut store, observer) = observed_store();
        let result = store.create_poll("X", None, None, ["OnlyOne"]);

        assert!(matches!(result, Err(PollError::ValidationFailed { .. })));
        assert!(store.is_empty());
        assert!(observer.changes().is_empty());
    }

    #[test]
    fn create_from_draft_applies_prefix() {
        let (mut store, _) = observed_store();
        let draft = PollDraft::new().title("Lunch").options(["Burger", "Hotdog"]);
        let poll = store.create_from_draft(&draft, "Poll : ").unwrap();
        assert_eq!(poll.question(), "Poll : Lunch");
    }

    // Removal tests

    #[test]
    fn remove_poll_on_single_element_empties_store() {
        let (mut store, observer) = observed_store();
        store.create_poll("Q", None, None, ["A", "B"]).unwrap();

        store.remove_poll(0).unwrap();

        assert!(store.is_empty());
        assert_eq!(
            observer.changes().last().cloned(),
            Some((ChangeKind::Removed { index: 0 }, "poll.removed.v1".to_string(), 0))
        );
    }

    #[test]
    fn remove_poll_on_empty_store_is_invalid_index() {
        let mut store = PollStore::new();
        assert_eq!(store.remove_poll(0), Err(PollError::invalid_index(0, 0)));
    }

    #[test]
    fn remove_poll_keeps_order_of_others() {
        let mut store = PollStore::with_polls(seed::demo_polls());
        store.create_poll("Newest", None, None, ["A", "B"]).unwrap();

        store.remove_poll(1).unwrap();

        let questions: Vec<&str> = store.list().iter().map(Poll::question).collect();
        assert_eq!(questions, vec!["Newest", "Poll : Favorite Food?"]);
    }

    // Selection and vote tests

    #[test]
    fn select_option_notifies_update() {
        let (mut store, observer) = observed_store();
        store.create_poll("Q", None, None, ["A", "B"]).unwrap();

        store.select_option(0, 1).unwrap();

        assert_eq!(store.list()[0].selected_index(), Some(1));
        assert_eq!(
            observer.changes().last().map(|c| c.0),
            Some(ChangeKind::Updated { index: 0 })
        );
    }

    #[test]
    fn select_option_on_missing_poll_is_invalid_index() {
        let mut store = PollStore::new();
        assert_eq!(store.select_option(3, 0), Err(PollError::invalid_index(3, 0)));
    }

    #[test]
    fn cast_vote_closes_front_poll() {
        let (mut store, observer) = observed_store();
        store
            .create_poll("Favorite Color?", Some("desc"), None, ["Red", "Blue"])
            .unwrap();

        let results = store.cast_vote(0, 1).unwrap();

        let poll = &store.list()[0];
        assert!(poll.is_closed());
        assert_eq!(poll.options()[1].votes(), 1);
        assert_eq!(results.total_votes, 1);
        assert_eq!(results.winning_index, 1);
        assert_eq!(
            observer.changes().last().map(|c| c.1.clone()),
            Some("poll.vote_cast.v1".to_string())
        );
    }

    #[test]
    fn second_vote_fails_without_notification() {
        let (mut store, observer) = observed_store();
        store.create_poll("Q", None, None, ["A", "B"]).unwrap();
        store.cast_vote(0, 0).unwrap();
        let before = observer.changes().len();

        assert_eq!(store.cast_vote(0, 1), Err(PollError::AlreadyClosed));
        assert_eq!(store.select_option(0, 1), Err(PollError::AlreadyClosed));

        assert_eq!(observer.changes().len(), before);
        assert_eq!(store.list()[0].total_votes(), 1);
    }

    #[test]
    fn submit_vote_commits_selection() {
        let (mut store, _) = observed_store();
        store.create_poll("Q", None, None, ["A", "B", "C"]).unwrap();
        store.select_option(0, 2).unwrap();

        let results = store.submit_vote(0).unwrap();

        assert_eq!(results.winning_index, 2);
        assert!(store.list()[0].is_closed());
        assert_eq!(store.list()[0].selected_index(), None);
    }

    #[test]
    fn submit_vote_without_selection_is_rejected() {
        let (mut store, observer) = observed_store();
        store.create_poll("Q", None, None, ["A", "B"]).unwrap();
        let before = observer.changes().len();

        assert_eq!(store.submit_vote(0), Err(PollError::NothingSelected));
        assert_eq!(observer.changes().len(), before);
    }

    #[test]
    fn submit_vote_on_closed_poll_reports_closed() {
        let mut store = PollStore::with_polls(seed::demo_polls());
        assert_eq!(store.submit_vote(1), Err(PollError::AlreadyClosed));
    }

    // Clear tests

    #[test]
    fn clear_empties_board_and_resets() {
        let observer = Arc::new(CapturingObserver::default());
        let mut store = PollStore::with_polls(seed::demo_polls());
        store.subscribe(observer.clone());

        store.clear();

        assert!(store.is_empty());
        assert_eq!(
            observer.changes(),
            vec![(ChangeKind::Reset, "poll.board_cleared.v1".to_string(), 0)]
        );
    }

    #[test]
    fn seeded_store_does_not_notify() {
        let observer = Arc::new(CapturingObserver::default());
        let mut store = PollStore::with_polls(seed::demo_polls());
        store.subscribe(observer.clone());
        assert_eq!(store.len(), 2);
        assert!(observer.changes().is_empty());
    }
}
