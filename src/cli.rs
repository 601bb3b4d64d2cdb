//! Command-line interface for genius_tictactoe.

use clap::{Parser, Subcommand};
use genius_tictactoe::{Player, PlayerKind};

/// Genius Tic-Tac-Toe - play against a full-depth minimax player
#[derive(Parser, Debug)]
#[command(name = "genius_tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to match configuration file
    #[arg(short, long, global = true, default_value = "genius_tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game, printing the board after every move
    Play {
        /// Move source for X (moves first)
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Move source for O
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Pause after each move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play many silent games and count the results
    Tally {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Move source for X (moves first)
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Move source for O
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the best square and its score for a position
    Suggest {
        /// Board as nine characters of X, O and '.', row by row
        board: String,

        /// Player to move
        #[arg(short, long, default_value = "x")]
        player: Player,
    },
}
