//! Error types for playing games.

use derive_more::Display;
use tictactoe_core::Player;

/// Number of invalid squares a move source may offer in a row before the
/// game is abandoned.
pub const MAX_INVALID_MOVES: u32 = 3;

/// Error raised while driving a game.
#[derive(Debug, Display)]
pub enum PlayError {
    /// The human's input stream ended before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// A move source was asked to move on a finished or full board.
    #[display("No moves available")]
    NoMovesAvailable,

    /// A move source kept offering squares that cannot be played.
    #[display("{} offered {} invalid squares in a row", _0, MAX_INVALID_MOVES)]
    TooManyInvalidMoves(Player),

    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlayError {
    fn from(err: std::io::Error) -> Self {
        PlayError::Io(err)
    }
}
