//! Genius Tic-Tac-Toe - play against a full-depth minimax player
//!
//! # Architecture
//!
//! - **Players**: interchangeable move sources (human, random, genius)
//! - **Orchestrator**: one game between two move sources
//! - **Tally**: many silent games, counted by outcome
//! - **Config**: match settings from TOML, overridable on the command line
//!
//! Board and search live in [`tictactoe_core`].
//!
//! # Example
//!
//! ```
//! use genius_tictactoe::{GeniusPlayer, Orchestrator, Outcome, PlayOptions, Player, RandomPlayer};
//!
//! let mut game = Orchestrator::new(
//!     Box::new(RandomPlayer::new(Player::X, Some(7))),
//!     Box::new(GeniusPlayer::new(Player::O, Some(8))),
//!     PlayOptions::quiet(),
//! );
//! let outcome = game.run(&mut std::io::sink())?;
//! assert_ne!(outcome, Outcome::Win(Player::X));
//! # Ok::<(), genius_tictactoe::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod orchestrator;
mod players;
mod tally;

// Crate-level exports - Game types (from tictactoe_core)
pub use tictactoe_core::{Board, MoveError, Outcome, Player, SearchResult, Square};

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Errors
pub use error::{MAX_INVALID_MOVES, PlayError};

// Crate-level exports - Players
pub use players::{
    GeniusPlayer, HumanPlayer, LineInput, MoveSource, PlayerKind, RandomPlayer, build_player,
};

// Crate-level exports - Game loop
pub use orchestrator::{Orchestrator, PlayOptions};
pub use tally::{Tally, run_tally};
