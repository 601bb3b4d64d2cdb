//! Computer player backed by full-depth minimax.

use super::{MoveSource, seeded_rng};
use crate::error::PlayError;
use rand::rngs::StdRng;
use tictactoe_core::{Board, Player};
use tracing::{debug, instrument};

/// Plays the game-theoretically optimal square.
///
/// The opening move on an empty board is random.
pub struct GeniusPlayer {
    name: String,
    mark: Player,
    rng: StdRng,
}

impl GeniusPlayer {
    /// Creates a minimax player; `seed` only affects the opening move.
    pub fn new(mark: Player, seed: Option<u64>) -> Self {
        Self {
            name: format!("Genius ({})", mark),
            mark,
            rng: seeded_rng(seed),
        }
    }
}

impl MoveSource for GeniusPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let mut scratch = board.clone();
        let square = tictactoe_core::get_move(&mut scratch, self.mark, &mut self.rng)
            .ok_or(PlayError::NoMovesAvailable)?;
        debug!(square, "Genius chose square");
        Ok(square)
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
