//! Interactive poll board shell.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use poll_board::adapters::cli::{parse_draft, Command};
use poll_board::adapters::{ListViewBinding, TextPollView, TracingObserver};
use poll_board::application::PollStore;
use poll_board::config::{AppConfig, LoggingConfig};
use poll_board::domain::poll::{seed, PollError, PollResults};

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "shell terminated");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_ascii_lowercase()));

    // Logs go to stderr so the board on stdout stays readable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(config: &AppConfig) -> io::Result<()> {
    let polls = if config.board.seed_demo_polls {
        seed::demo_polls()
    } else {
        Vec::new()
    };
    let mut store = PollStore::with_polls(polls);
    store.subscribe(Arc::new(TracingObserver::new()));

    let view = Arc::new(TextPollView::new());
    ListViewBinding::attach(&mut store, Arc::clone(&view));
    info!(polls = store.len(), "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", view.render())?;
    writeln!(stdout, "Type 'help' for commands.")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                // Help output and usage errors, already formatted by clap.
                write!(stdout, "{}", e)?;
                continue;
            }
        };

        let outcome = match command {
            Command::Quit => break,
            Command::List => {
                write!(stdout, "{}", view.render())?;
                continue;
            }
            Command::Results { poll } => match store.get(poll) {
                Some(found) => {
                    write!(stdout, "{}", format_results(&found.results()))?;
                    continue;
                }
                None => Err(PollError::invalid_index(poll, store.len())),
            },
            Command::New { words } => store
                .create_from_draft(&parse_draft(&words.join(" ")), &config.board.question_prefix)
                .map(|_| ()),
            Command::Select { poll, option } => store.select_option(poll, option),
            Command::Vote { poll, option } => {
                let results = match option {
                    Some(option) => store.cast_vote(poll, option),
                    None => store.submit_vote(poll),
                };
                results.map(|results| {
                    if let Some(winner) = results.winner_label() {
                        info!(winner, "poll closed");
                    }
                })
            }
            Command::Delete { poll } => store.remove_poll(poll),
        };

        match outcome {
            Ok(()) => write!(stdout, "{}", view.render())?,
            Err(e) => {
                warn!(code = %e.code(), "command rejected");
                writeln!(stdout, "{}", e.message())?;
            }
        }
    }

    store.clear();
    info!("session ended");
    Ok(())
}

fn format_results(results: &PollResults) -> String {
    let mut out = String::new();
    for (i, option) in results.options.iter().enumerate() {
        let marker = if option.is_winner { '*' } else { ' ' };
        out.push_str(&format!(
            "  {} {}. {}: {} ({})\n",
            marker,
            i + 1,
            option.label,
            option.votes,
            option.share
        ));
    }
    out.push_str(&format!("  {} Votes\n", results.total_votes));
    out
}
