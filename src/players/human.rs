//! Human player that reads squares from a line-based input.

use super::MoveSource;
use crate::error::PlayError;
use std::io::{BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};
use tictactoe_core::{Board, Player};
use tracing::{debug, instrument};

/// Line-oriented input a human player reads squares from.
///
/// Standard input takes its lock for each line only, so several human
/// players can share the terminal.
pub trait LineInput {
    /// Appends the next line to `buf`, returning the bytes read (0 at EOF).
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

impl LineInput for Stdin {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        Stdin::read_line(&*self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineInput for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player prompting on `output` and reading from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Player,
    input: R,
    output: W,
}

impl<R: LineInput, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over arbitrary input and output streams.
    pub fn new(mark: Player, input: R, output: W) -> Self {
        Self {
            name: format!("Human ({})", mark),
            mark,
            input,
            output,
        }
    }

    /// Consumes the player, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl HumanPlayer<Stdin, Stdout> {
    /// Creates a human player on the terminal.
    pub fn stdio(mark: Player) -> Self {
        Self::new(mark, std::io::stdin(), std::io::stdout())
    }
}

impl<R: LineInput, W: Write> MoveSource for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let available = board.available_moves();
        if available.is_empty() {
            return Err(PlayError::NoMovesAvailable);
        }

        loop {
            write!(self.output, "{}'s turn. Input move (0-8): ", self.mark)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(square) if available.contains(&square) => {
                    debug!(square, "Human chose square");
                    return Ok(square);
                }
                _ => {
                    debug!(input = %line.trim(), "Rejected input");
                    writeln!(self.output, "Invalid square. Try again.")?;
                }
            }
        }
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
