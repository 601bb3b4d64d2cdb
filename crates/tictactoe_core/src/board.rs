//! Mutable 3x3 board with incremental win detection.

use crate::error::{BoardParseError, MoveError};
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 9;

/// Both diagonals, top-left to bottom-right first.
const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Every winning line: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    DIAGONALS[0],
    DIAGONALS[1],
];

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order (0-8). The board remembers the
/// player whose move completed a line; [`Board::undo_move`] forgets it
/// again so a search can walk back up the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; SQUARE_COUNT],
    last_winner: Option<Player>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARE_COUNT],
            last_winner: None,
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; SQUARE_COUNT] {
        &self.squares
    }

    /// Player whose move completed a line, if any.
    pub fn last_winner(&self) -> Option<Player> {
        self.last_winner
    }

    /// Indices of all empty squares, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// True if any square is still empty.
    pub fn empty_squares(&self) -> bool {
        self.squares.contains(&Square::Empty)
    }

    /// Number of empty squares.
    pub fn num_empty_squares(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Only the lines through `index` are checked for a win: its row, its
    /// column, and for even indices (corners and center) both diagonals.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index above 8 and
    /// [`MoveError::SquareOccupied`] if the square already holds a mark.
    /// The board is unchanged on error.
    pub fn make_move(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.get(index) {
            None => return Err(MoveError::OutOfRange(index)),
            Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(index)),
            Some(Square::Empty) => {}
        }

        self.squares[index] = Square::Occupied(player);
        if self.completes_line(index, player) {
            self.last_winner = Some(player);
        }
        Ok(())
    }

    /// Clears the square at `index` and forgets the winner.
    ///
    /// Must mirror a preceding [`Board::make_move`]; out-of-range indices
    /// are ignored.
    pub fn undo_move(&mut self, index: usize) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
            self.last_winner = None;
        }
    }

    fn completes_line(&self, index: usize, player: Player) -> bool {
        let row = index / 3 * 3;
        let col = index % 3;
        self.owns_line([row, row + 1, row + 2], player)
            || self.owns_line([col, col + 3, col + 6], player)
            || (index % 2 == 0
                && DIAGONALS
                    .iter()
                    .any(|diagonal| self.owns_line(*diagonal, player)))
    }

    fn owns_line(&self, line: [usize; 3], player: Player) -> bool {
        line.iter()
            .all(|&i| self.squares[i] == Square::Occupied(player))
    }

    /// Renders the board as rows of `| X | O |   |`.
    pub fn display(&self) -> String {
        render_rows(|index| self.squares[index].symbol().to_string())
    }

    /// Renders the square numbering guide shown before a game.
    pub fn display_numbers() -> String {
        render_rows(|index| index.to_string())
    }
}

fn render_rows(cell: impl Fn(usize) -> String) -> String {
    (0..3)
        .map(|row| {
            let cells: Vec<String> = (row * 3..row * 3 + 3).map(&cell).collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares from `X`, `O` and `.`, `_` or `-` for empty.
    ///
    /// Whitespace and `|` are ignored, so both `"XX.OO...."` and the
    /// rendered board form are accepted. The winner is recomputed from
    /// every line.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(SQUARE_COUNT);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "Unexpected character '{}'",
                        other
                    )));
                }
            };
            squares.push(square);
        }

        let squares: [Square; SQUARE_COUNT] = squares.try_into().map_err(|v: Vec<Square>| {
            BoardParseError::new(format!("Expected 9 squares, found {}", v.len()))
        })?;

        let mut winners = LINES.iter().filter_map(|[a, b, c]| {
            let first = squares[*a];
            (first != Square::Empty && first == squares[*b] && first == squares[*c])
                .then(|| first.player())
                .flatten()
        });

        let last_winner = winners.next();
        if let Some(winner) = last_winner
            && winners.any(|other| other != winner)
        {
            return Err(BoardParseError::new("Both players have a completed line"));
        }

        Ok(Self {
            squares,
            last_winner,
        })
    }
}
