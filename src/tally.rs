//! Batch play: many silent games, counted by outcome.

use crate::error::PlayError;
use crate::orchestrator::{Orchestrator, PlayOptions};
use crate::players::{PlayerKind, build_player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Outcome, Player};
use tracing::{debug, info, instrument};

/// Win and draw counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Tally {
    /// Records one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.ties += 1,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "After {} iterations, we see {} X wins, {} O wins, {} ties",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.ties
        )
    }
}

/// Plays `games` games between fresh players of the given kinds.
///
/// With a `seed`, game `i` seeds X with `seed + 2i` and O with
/// `seed + 2i + 1`, so a whole batch is repeatable.
#[instrument]
pub fn run_tally(
    x: PlayerKind,
    o: PlayerKind,
    games: u32,
    seed: Option<u64>,
) -> Result<Tally, PlayError> {
    let mut tally = Tally::default();
    let mut sink = std::io::sink();

    for game in 0..games {
        let game_seed = seed.map(|s| s.wrapping_add(2 * u64::from(game)));
        let mut orchestrator = Orchestrator::new(
            build_player(x, Player::X, game_seed),
            build_player(o, Player::O, game_seed.map(|s| s.wrapping_add(1))),
            PlayOptions::quiet(),
        );
        let outcome = orchestrator.run(&mut sink)?;
        debug!(game, %outcome, "Game finished");
        tally.record(outcome);
    }

    info!(
        x_wins = tally.x_wins,
        o_wins = tally.o_wins,
        ties = tally.ties,
        "Tally complete"
    );
    Ok(tally)
}
