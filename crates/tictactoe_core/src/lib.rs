//! Tic-tac-toe board model and adversarial search.
//!
//! # Architecture
//!
//! - **Board**: mutable 3x3 grid with incremental win detection and undo
//! - **Search**: full-depth minimax that finds the optimal square for a player
//!
//! The board has no knowledge of the search; the search drives the board
//! through apply/undo pairs and leaves it as it found it.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Player, minimax};
//!
//! let mut board: Board = "XX.OO....".parse()?;
//! let result = minimax(&mut board, Player::O, Player::O);
//! assert_eq!(result.position, Some(5));
//! # Ok::<(), tictactoe_core::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod search;
mod types;

pub use board::{Board, SQUARE_COUNT};
pub use error::{BoardParseError, MoveError};
pub use search::{Minimax, SearchResult, best_move, get_move, minimax};
pub use types::{Outcome, Player, Square};
