//! Poll board behaviour configuration

use serde::Deserialize;

use super::ValidationError;
use crate::domain::poll::DEFAULT_QUESTION_PREFIX;

/// Longest accepted question prefix.
pub const MAX_QUESTION_PREFIX_LENGTH: usize = 32;

/// Board settings
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Start the session with the demo polls
    #[serde(default = "default_seed_demo_polls")]
    pub seed_demo_polls: bool,

    /// Text put in front of every authored poll name
    #[serde(default = "default_question_prefix")]
    pub question_prefix: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_demo_polls: default_seed_demo_polls(),
            question_prefix: default_question_prefix(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question_prefix.chars().count() > MAX_QUESTION_PREFIX_LENGTH {
            return Err(ValidationError::QuestionPrefixTooLong {
                max: MAX_QUESTION_PREFIX_LENGTH,
            });
        }
        Ok(())
    }
}

fn default_seed_demo_polls() -> bool {
    true
}

fn default_question_prefix() -> String {
    DEFAULT_QUESTION_PREFIX.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_defaults() {
        let board = BoardConfig::default();
        assert!(board.seed_demo_polls);
        assert_eq!(board.question_prefix, "Poll : ");
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_empty_prefix_is_valid() {
        let board = BoardConfig {
            question_prefix: String::new(),
            ..BoardConfig::default()
        };
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_long_prefix_rejected() {
        let board = BoardConfig {
            question_prefix: "x".repeat(MAX_QUESTION_PREFIX_LENGTH + 1),
            ..BoardConfig::default()
        };
        assert_eq!(
            board.validate(),
            Err(ValidationError::QuestionPrefixTooLong { max: 32 })
        );
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let board: BoardConfig = serde_json::from_str(r#"{"seed_demo_polls": false}"#).unwrap();
        assert!(!board.seed_demo_polls);
        assert_eq!(board.question_prefix, "Poll : ");
    }
}
