//! Game orchestration between players.

use crate::error::{MAX_INVALID_MOVES, PlayError};
use crate::players::MoveSource;
use derive_getters::Getters;
use std::io::Write;
use std::time::Duration;
use tictactoe_core::{Board, Outcome, Player as Mark};
use tracing::{debug, info, instrument, warn};

/// How a game is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, derive_new::new)]
pub struct PlayOptions {
    /// Print the board after every move.
    print_game: bool,
    /// Pause after each move while printing.
    move_delay: Duration,
}

impl PlayOptions {
    /// Silent play, as used for batch runs.
    pub fn quiet() -> Self {
        Self::default()
    }
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn MoveSource>,
    player_o: Box<dyn MoveSource>,
    options: PlayOptions,
}

impl Orchestrator {
    /// Creates a new orchestrator. X moves first.
    pub fn new(
        player_x: Box<dyn MoveSource>,
        player_o: Box<dyn MoveSource>,
        options: PlayOptions,
    ) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            options,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays one game on a fresh board, writing it to `out` when printing
    /// is on. The finished board stays readable through [`Orchestrator::board`].
    ///
    /// A square that cannot be played is logged and the same side is asked
    /// again, up to [`MAX_INVALID_MOVES`] times in a row.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome, PlayError> {
        info!("Starting game");
        self.restart();
        let print = self.options.print_game;

        if print {
            writeln!(out, "{}", Board::display_numbers())?;
        }

        let mut mark = Mark::X;
        let mut invalid = 0;

        while self.board.empty_squares() {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let square = player.get_move(&self.board)?;

            match self.board.make_move(square, mark) {
                Ok(()) => {
                    invalid = 0;
                    debug!(%mark, square, "Move made");

                    if print {
                        writeln!(out, "{} makes a move to square {}", mark, square)?;
                        writeln!(out, "{}", self.board.display())?;
                        writeln!(out)?;
                    }

                    if let Some(winner) = self.board.last_winner() {
                        let outcome = Outcome::Win(winner);
                        if print {
                            writeln!(out, "{}", outcome)?;
                        }
                        info!(%outcome, "Game over");
                        return Ok(outcome);
                    }

                    mark = mark.opponent();
                }
                Err(e) => {
                    invalid += 1;
                    warn!(player = %player.name(), error = %e, attempt = invalid, "Invalid move");
                    if invalid >= MAX_INVALID_MOVES {
                        return Err(PlayError::TooManyInvalidMoves(mark));
                    }
                }
            }

            if print && !self.options.move_delay.is_zero() {
                std::thread::sleep(self.options.move_delay);
            }
        }

        let outcome = Outcome::Draw;
        if print {
            writeln!(out, "{}", outcome)?;
        }
        info!(%outcome, "Game over");
        Ok(outcome)
    }

    /// Restarts the game on a fresh board.
    pub fn restart(&mut self) {
        self.board = Board::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays a fixed list of squares, in order.
    struct Scripted {
        mark: Mark,
        squares: std::vec::IntoIter<usize>,
    }

    impl Scripted {
        fn boxed(mark: Mark, squares: &[usize]) -> Box<dyn MoveSource> {
            Box::new(Self {
                mark,
                squares: squares.to_vec().into_iter(),
            })
        }
    }

    impl MoveSource for Scripted {
        fn get_move(&mut self, _board: &Board) -> Result<usize, PlayError> {
            self.squares.next().ok_or(PlayError::NoMovesAvailable)
        }

        fn mark(&self) -> Mark {
            self.mark
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut game = Orchestrator::new(
            Scripted::boxed(Mark::X, &[0, 1, 2]),
            Scripted::boxed(Mark::O, &[3, 4]),
            PlayOptions::quiet(),
        );
        let mut out = Vec::new();
        assert_eq!(game.run(&mut out).unwrap(), Outcome::Win(Mark::X));
        assert!(out.is_empty());
        assert_eq!(game.board().num_empty_squares(), 4);
    }

    #[test]
    fn test_draw_prints_tie() {
        let mut game = Orchestrator::new(
            Scripted::boxed(Mark::X, &[0, 2, 4, 5, 7]),
            Scripted::boxed(Mark::O, &[1, 3, 6, 8]),
            PlayOptions::new(true, Duration::ZERO),
        );
        let mut out = Vec::new();
        assert_eq!(game.run(&mut out).unwrap(), Outcome::Draw);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("| 0 | 1 | 2 |"));
        assert!(text.contains("X makes a move to square 0"));
        assert!(text.contains("O makes a move to square 8"));
        assert!(text.trim_end().ends_with("It's a tie!"));
    }

    #[test]
    fn test_invalid_square_is_retried() {
        let mut game = Orchestrator::new(
            Scripted::boxed(Mark::X, &[4, 0, 8, 2]),
            Scripted::boxed(Mark::O, &[4, 1, 6]),
            PlayOptions::quiet(),
        );
        let mut out = Vec::new();
        // O's first answer hits X's center and is asked again.
        assert_eq!(game.run(&mut out).unwrap(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_gives_up_after_repeated_invalid_squares() {
        let mut game = Orchestrator::new(
            Scripted::boxed(Mark::X, &[4]),
            Scripted::boxed(Mark::O, &[4, 4, 9]),
            PlayOptions::quiet(),
        );
        let mut out = Vec::new();
        let err = game.run(&mut out).unwrap_err();
        assert!(matches!(err, PlayError::TooManyInvalidMoves(Mark::O)));
    }

    #[test]
    fn test_second_run_starts_on_fresh_board() {
        let mut game = Orchestrator::new(
            Scripted::boxed(Mark::X, &[0, 1, 2, 6, 7, 8]),
            Scripted::boxed(Mark::O, &[3, 4, 0, 1]),
            PlayOptions::quiet(),
        );
        assert_eq!(game.run(&mut std::io::sink()).unwrap(), Outcome::Win(Mark::X));
        assert_eq!(game.run(&mut std::io::sink()).unwrap(), Outcome::Win(Mark::X));

        let expected: Board = "OO....XXX".parse().unwrap();
        assert_eq!(game.board(), &expected);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut game = Orchestrator::new(
            Scripted::boxed(Mark::X, &[0, 1, 2]),
            Scripted::boxed(Mark::O, &[3, 4]),
            PlayOptions::quiet(),
        );
        game.run(&mut std::io::sink()).unwrap();
        game.restart();
        assert_eq!(game.board(), &Board::new());
    }
}
