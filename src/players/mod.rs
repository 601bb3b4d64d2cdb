//! Move sources: anything that can pick a square for one side.

mod genius;
mod human;
mod random;

pub use genius::GeniusPlayer;
pub use human::{HumanPlayer, LineInput};
pub use random::RandomPlayer;

use crate::error::PlayError;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Player};
use tracing::instrument;

/// Trait for players that can make moves.
pub trait MoveSource {
    /// Gets a move from this player.
    ///
    /// Returns the square (0-8) for the next move. Sources are expected to
    /// pick from [`Board::available_moves`]; the game loop re-asks when
    /// they don't.
    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError>;

    /// Mark this player places.
    fn mark(&self) -> Player;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Kind of move source, as chosen on the command line or in config.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Reads squares from standard input.
    Human,
    /// Picks uniformly among open squares.
    Random,
    /// Full-depth minimax.
    Genius,
}

/// Builds a move source of `kind` playing `mark`.
///
/// `seed` makes the random choices repeatable; `None` seeds from entropy.
#[instrument]
pub fn build_player(kind: PlayerKind, mark: Player, seed: Option<u64>) -> Box<dyn MoveSource> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(mark)),
        PlayerKind::Random => Box::new(RandomPlayer::new(mark, seed)),
        PlayerKind::Genius => Box::new(GeniusPlayer::new(mark, seed)),
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    }
}
