//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark character for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used when rendering this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game ended with a completed line.
    Win(Player),
    /// Board filled without a winner.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins!", player),
            Outcome::Draw => write!(f, "It's a tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn test_players_round_trip_through_display() {
        let players: Vec<Player> = Player::iter().collect();
        assert_eq!(players, vec![Player::X, Player::O]);
        for player in players {
            assert_eq!(player.to_string().parse::<Player>(), Ok(player));
            assert_eq!(Square::Occupied(player).symbol(), player.symbol());
        }
    }

    #[test]
    fn test_player_parses_either_case() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!("O".parse::<Player>(), Ok(Player::O));
        assert!("z".parse::<Player>().is_err());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Win(Player::O).to_string(), "O wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a tie!");
    }
}
