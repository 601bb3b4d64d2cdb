//! Genius Tic-Tac-Toe - Unified CLI
//!
//! Play single games or benchmark move sources against each other.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use genius_tictactoe::{
    Board, MatchConfig, Orchestrator, PlayOptions, Player, PlayerKind, build_player, run_tally,
};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            x,
            o,
            delay_ms,
            seed,
        } => run_play(&cli.config, x, o, delay_ms, seed),
        Command::Tally {
            games,
            x,
            o,
            seed,
            json,
        } => run_batch(&cli.config, games, x, o, seed, json),
        Command::Suggest { board, player } => run_suggest(&board, player),
    }
}

/// Play one printed game
#[instrument(skip(config_path))]
fn run_play(
    config_path: &Path,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let config = MatchConfig::load_or_default(config_path)?;
    let x = x.unwrap_or(*config.x());
    let o = o.unwrap_or(*config.o());
    let seed = seed.or(*config.seed());
    let delay = delay_ms.map_or_else(|| config.move_delay(), Duration::from_millis);

    info!(%x, %o, "Starting game");

    let mut game = Orchestrator::new(
        build_player(x, Player::X, seed),
        build_player(o, Player::O, seed.map(|s| s.wrapping_add(1))),
        PlayOptions::new(true, delay),
    );

    let mut stdout = std::io::stdout().lock();
    game.run(&mut stdout)?;
    Ok(())
}

/// Play many silent games and print the counts
#[instrument(skip(config_path))]
fn run_batch(
    config_path: &Path,
    games: Option<u32>,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = MatchConfig::load_or_default(config_path)?;
    let games = games.unwrap_or(*config.games());
    let x = x.unwrap_or(*config.x());
    let o = o.unwrap_or(*config.o());
    let seed = seed.or(*config.seed());

    let tally = run_tally(x, o, games, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}

/// Print the best square for `player` on `board`
#[instrument]
fn run_suggest(board: &str, player: Player) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;

    println!("{}", board);
    let result = tictactoe_core::best_move(&board, player);
    match result.position {
        Some(position) => println!(
            "{} should play square {} (score {})",
            player, position, result.score
        ),
        None => println!("Game is over (score {} for {})", result.score, player),
    }
    Ok(())
}
