//! Line commands understood by the interactive shell.
//!
//! Each stdin line is parsed as a multicall `clap` command, so the first word
//! picks the subcommand and clap renders `help` and usage errors. Positions
//! are typed 1-based, as the board displays them, and converted to 0-based
//! indices by the value parser.

use clap::{Parser, Subcommand};

use crate::domain::poll::PollDraft;

/// One shell line.
#[derive(Debug, Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the board
    #[command(visible_alias = "ls")]
    List,

    /// Create a poll: <name> | <opt>, <opt>[, ...] [| <description> [| <link>]]
    New {
        /// Poll definition, sections separated by '|'
        #[arg(value_name = "DEFINITION", trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// Choose an option without voting
    Select {
        /// Poll number as shown on the board
        #[arg(value_parser = position)]
        poll: usize,
        /// Option number within the poll
        #[arg(value_parser = position)]
        option: usize,
    },

    /// Vote (uses the selection if no option is given)
    Vote {
        /// Poll number as shown on the board
        #[arg(value_parser = position)]
        poll: usize,
        /// Option number within the poll
        #[arg(value_parser = position)]
        option: Option<usize>,
    },

    /// Show the tally of a poll
    Results {
        /// Poll number as shown on the board
        #[arg(value_parser = position)]
        poll: usize,
    },

    /// Remove a poll
    #[command(visible_alias = "rm")]
    Delete {
        /// Poll number as shown on the board
        #[arg(value_parser = position)]
        poll: usize,
    },

    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the `clap` error for unknown commands, missing or malformed
    /// arguments, and for `help` / `--help` (rendered help text).
    pub fn parse(line: &str) -> Result<Option<Self>, clap::Error> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let parsed = ShellLine::try_parse_from(line.split_whitespace())?;
        Ok(Some(parsed.command))
    }
}

/// Builds the authoring form from `<name> | <opt>, <opt> [| <description> [| <link>]]`.
///
/// Missing sections stay empty and are reported by the draft when it is
/// finished.
pub fn parse_draft(definition: &str) -> PollDraft {
    let mut parts = definition.split('|').map(str::trim);

    let mut draft = PollDraft::new().title(parts.next().unwrap_or_default());
    if let Some(options) = parts.next() {
        draft = draft.options(options.split(',').map(str::trim));
    }
    if let Some(description) = parts.next() {
        draft = draft.description(description);
    }
    if let Some(link) = parts.next() {
        draft = draft.link(link);
    }
    draft
}

fn position(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("'{}' is not a position (use 1, 2, ...)", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poll::DEFAULT_QUESTION_PREFIX;
    use clap::error::ErrorKind;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    fn parse_err(line: &str) -> ErrorKind {
        Command::parse(line).unwrap_err().kind()
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parses_simple_verbs_and_aliases() {
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("ls"), Command::List);
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("exit"), Command::Quit);
        assert_eq!(parse("rm 2"), Command::Delete { poll: 1 });
    }

    #[test]
    fn positions_become_zero_based() {
        assert_eq!(parse("select 2 3"), Command::Select { poll: 1, option: 2 });
        assert_eq!(parse("delete 1"), Command::Delete { poll: 0 });
        assert_eq!(parse("results 4"), Command::Results { poll: 3 });
    }

    #[test]
    fn vote_option_is_optional() {
        assert_eq!(parse("vote 1"), Command::Vote { poll: 0, option: None });
        assert_eq!(parse("vote 1 2"), Command::Vote { poll: 0, option: Some(1) });
    }

    #[test]
    fn rejects_zero_and_garbage_positions() {
        assert_eq!(parse_err("results 0"), ErrorKind::ValueValidation);
        assert_eq!(parse_err("select x 1"), ErrorKind::ValueValidation);
    }

    #[test]
    fn reports_missing_arguments() {
        assert_eq!(parse_err("select 1"), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse_err("delete"), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn rejects_unknown_verb_and_extra_arguments() {
        assert!(Command::parse("dance now").is_err());
        assert!(Command::parse("list everything").is_err());
    }

    #[test]
    fn help_is_rendered_by_clap() {
        let err = Command::parse("help").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let text = err.to_string();
        assert!(text.contains("select"));
        assert!(text.contains("vote"));

        assert_eq!(parse_err("vote --help"), ErrorKind::DisplayHelp);
    }

    #[test]
    fn new_keeps_the_whole_definition() {
        let Command::New { words } = parse("new Lunch | Burger, , Hotdog | Team lunch choice.") else {
            panic!("expected New");
        };
        assert_eq!(words.join(" "), "Lunch | Burger, , Hotdog | Team lunch choice.");
    }

    #[test]
    fn draft_from_full_definition() {
        let draft = parse_draft(
            "Lunch | Burger, , Hotdog | Team lunch choice. | https://example.com/menu",
        );

        let poll = draft.finish(DEFAULT_QUESTION_PREFIX).unwrap();
        assert_eq!(poll.question(), "Poll : Lunch");
        assert_eq!(poll.options().len(), 2);
        assert_eq!(poll.description(), Some("Team lunch choice."));
        assert_eq!(poll.link(), Some("https://example.com/menu"));
    }

    #[test]
    fn draft_without_options_is_rejected_when_finished() {
        let err = parse_draft("Lunch").finish(DEFAULT_QUESTION_PREFIX).unwrap_err();
        assert_eq!(err.message(), "Enter at least two options");

        let err = parse_draft("").finish(DEFAULT_QUESTION_PREFIX).unwrap_err();
        assert_eq!(err.message(), "Poll name is required");
    }
}
