//! Authoring flow for new polls.
//!
//! A draft mirrors the "Create Poll" form: a name, an optional description
//! and link, and a growable list of option fields that starts with two empty
//! rows. Finishing the draft applies the form's rules and yields a [`Poll`].

use super::{Poll, PollError};

/// Prefix the authoring flow puts in front of every poll name.
pub const DEFAULT_QUESTION_PREFIX: &str = "Poll : ";

const INITIAL_OPTION_FIELDS: usize = 2;

/// Poll form being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollDraft {
    title: String,
    description: String,
    link: String,
    option_fields: Vec<String>,
}

impl Default for PollDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl PollDraft {
    /// Empty form with two option rows.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            link: String::new(),
            option_fields: vec![String::new(); INITIAL_OPTION_FIELDS],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Fills the option rows in order, adding rows as needed.
    pub fn options<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (i, label) in labels.into_iter().enumerate() {
            if i >= self.option_fields.len() {
                self.add_option_field();
            }
            self.option_fields[i] = label.into();
        }
        self
    }

    /// Appends an empty option row and returns its index.
    pub fn add_option_field(&mut self) -> usize {
        self.option_fields.push(String::new());
        self.option_fields.len() - 1
    }

    /// Sets the text of an existing option row.
    pub fn set_option(&mut self, index: usize, label: impl Into<String>) -> Result<(), PollError> {
        let len = self.option_fields.len();
        let field = self
            .option_fields
            .get_mut(index)
            .ok_or_else(|| PollError::invalid_index(index, len))?;
        *field = label.into();
        Ok(())
    }

    pub fn option_fields(&self) -> &[String] {
        &self.option_fields
    }

    /// Placeholder shown in an empty option row ("Option 1", "Option 2", ...).
    pub fn placeholder(index: usize) -> String {
        format!("Option {}", index + 1)
    }

    /// Validates the form and builds an open poll.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank
    /// - `ValidationFailed` if fewer than two option rows hold text
    pub fn finish(&self, question_prefix: &str) -> Result<Poll, PollError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PollError::validation("question", "Poll name is required"));
        }

        Poll::new(
            &format!("{}{}", question_prefix, title),
            Some(self.description.as_str()),
            Some(self.link.as_str()),
            &self.option_fields,
        )
    }
}
