//! Computer player that picks any open square.

use super::{MoveSource, seeded_rng};
use crate::error::PlayError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tictactoe_core::{Board, Player};
use tracing::debug;

/// Picks uniformly among the open squares.
pub struct RandomPlayer {
    name: String,
    mark: Player,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player; `seed` makes its choices repeatable.
    pub fn new(mark: Player, seed: Option<u64>) -> Self {
        Self {
            name: format!("Random ({})", mark),
            mark,
            rng: seeded_rng(seed),
        }
    }
}

impl MoveSource for RandomPlayer {
    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let square = board
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayError::NoMovesAvailable)?;
        debug!(player = %self.name, square, "Random choice");
        Ok(square)
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_picks_open_squares() {
        let board: Board = "XOXOX.O..".parse().unwrap();
        let mut player = RandomPlayer::new(Player::X, Some(5));
        for _ in 0..50 {
            let square = player.get_move(&board).unwrap();
            assert!([5, 7, 8].contains(&square));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomPlayer::new(Player::O, Some(99));
        let mut b = RandomPlayer::new(Player::O, Some(99));
        for _ in 0..10 {
            assert_eq!(a.get_move(&board).unwrap(), b.get_move(&board).unwrap());
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        let mut player = RandomPlayer::new(Player::X, Some(1));
        assert!(matches!(
            player.get_move(&board),
            Err(PlayError::NoMovesAvailable)
        ));
    }
}
