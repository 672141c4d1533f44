//! Demo polls the board starts with when seeding is enabled.

use crate::domain::foundation::{PollId, PollStatus, Timestamp};

use super::{Poll, PollOption};

/// Returns the demo board: an open anime poll followed by a closed food poll.
pub fn demo_polls() -> Vec<Poll> {
    vec![anime_poll(), food_poll()]
}

fn anime_poll() -> Poll {
    Poll::reconstitute(
        PollId::new(),
        "Poll : Favorite Anime?".to_string(),
        Some("Pick your favorite.".to_string()),
        None,
        options(&[("Naruto", 0), ("Dragonball", 0), ("One Piece", 0)]),
        PollStatus::Open,
        None,
        Timestamp::now(),
    )
}

fn food_poll() -> Poll {
    Poll::reconstitute(
        PollId::new(),
        "Poll : Favorite Food?".to_string(),
        Some("Team lunch choice.".to_string()),
        Some("https://example.com/menu".to_string()),
        options(&[("Burger", 30), ("Hotdog", 15), ("Sandwich", 5)]),
        PollStatus::Closed,
        None,
        Timestamp::now(),
    )
}

fn options(entries: &[(&str, u32)]) -> Vec<PollOption> {
    entries
        .iter()
        .filter_map(|(label, votes)| PollOption::with_votes(*label, *votes).ok())
        .collect()
}
