//! Plain-text rendering of the board, one card per poll.
//!
//! Open polls show their choices and the provisional selection; closed polls
//! show per-option shares, the final vote and the vote count.

use std::sync::RwLock;

use crate::domain::poll::Poll;
use crate::ports::PollListView;

const BAR_WIDTH: usize = 20;

/// Text view that keeps one rendered card per list row.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct TextPollView {
    rows: RwLock<Vec<String>>,
}

impl Default for TextPollView {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPollView {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Rendered cards in list order.
    pub fn rows(&self) -> Vec<String> {
        self.rows
            .read()
            .expect("TextPollView: rows lock poisoned")
            .clone()
    }

    /// Whole board, cards numbered from 1 as the shell addresses them.
    pub fn render(&self) -> String {
        let rows = self.rows();
        if rows.is_empty() {
            return "No polls yet.\n".to_string();
        }

        let mut out = String::new();
        for (i, card) in rows.iter().enumerate() {
            out.push_str(&format!("[{}] {}\n", i + 1, card));
        }
        out
    }

    /// Renders a single card.
    pub fn render_card(poll: &Poll) -> String {
        if poll.is_closed() {
            render_closed(poll)
        } else {
            render_open(poll)
        }
    }
}

fn render_open(poll: &Poll) -> String {
    let mut card = String::new();
    card.push_str(&format!("{}\n", poll.question()));
    if let Some(description) = poll.description() {
        card.push_str(&format!("    {}\n", description));
    }
    if let Some(link) = poll.link() {
        card.push_str(&format!("    {}\n", link));
    }
    for (i, option) in poll.options().iter().enumerate() {
        let marker = if poll.selected_index() == Some(i) { '>' } else { ' ' };
        card.push_str(&format!("  {} Option #{}: {}\n", marker, i + 1, option.label()));
    }
    if let Some(selected) = poll.selected_option() {
        card.push_str(&format!("    Selected: {}\n", selected.label()));
    }
    card
}

fn render_closed(poll: &Poll) -> String {
    let results = poll.results();
    let mut card = String::new();
    card.push_str(&format!("{}  [closed]\n", poll.question()));
    for (i, option) in results.options.iter().enumerate() {
        let filled = usize::from(option.share.value()) * BAR_WIDTH / 100;
        let marker = if option.is_winner { '*' } else { ' ' };
        card.push_str(&format!(
            "  {} Option #{}: {}  ({})  [{}{}]\n",
            marker,
            i + 1,
            option.label,
            option.share,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled)
        ));
    }
    if let Some(winner) = results.winner_label() {
        card.push_str(&format!("    Final Vote: {}\n", winner));
    }
    card.push_str(&format!("    {} Votes\n", results.total_votes));
    card
}

impl PollListView for TextPollView {
    fn reset(&self, polls: &[Poll]) {
        let mut rows = self.rows.write().expect("TextPollView: rows lock poisoned");
        *rows = polls.iter().map(Self::render_card).collect();
    }

    fn bind(&self, index: usize, poll: &Poll) {
        let mut rows = self.rows.write().expect("TextPollView: rows lock poisoned");
        let index = index.min(rows.len());
        rows.insert(index, Self::render_card(poll));
    }

    fn update(&self, index: usize, poll: &Poll) {
        let mut rows = self.rows.write().expect("TextPollView: rows lock poisoned");
        if let Some(row) = rows.get_mut(index) {
            *row = Self::render_card(poll);
        }
    }

    fn remove(&self, index: usize) {
        let mut rows = self.rows.write().expect("TextPollView: rows lock poisoned");
        if index < rows.len() {
            rows.remove(index);
        }
    }
}
