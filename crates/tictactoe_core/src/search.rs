//! Full-depth minimax search over the tic-tac-toe game tree.
//!
//! The search mutates the board in place: every hypothetical move is
//! applied with [`Board::make_move`] and taken back with
//! [`Board::undo_move`] before the next candidate is tried, so the board
//! is identical before and after a call.
//!
//! Scores are from the point of view of the *self* player. A win found
//! with `n` empty squares left scores `n + 1`, so quicker wins and slower
//! losses are preferred over a plain ±1.

use crate::board::{Board, SQUARE_COUNT};
use crate::types::Player;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best move and its score for one searched position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Square to play. `None` only for terminal positions.
    pub position: Option<usize>,
    /// Signed score, positive when the self player wins.
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Minimax searcher optimizing for one player.
///
/// Counts visited nodes so callers can report how much of the tree a
/// search walked.
#[derive(Debug, Clone)]
pub struct Minimax {
    self_player: Player,
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher optimizing for `self_player`.
    pub fn new(self_player: Player) -> Self {
        Self {
            self_player,
            nodes: 0,
        }
    }

    /// Player this searcher maximizes for.
    pub fn self_player(&self) -> Player {
        self.self_player
    }

    /// Nodes visited since construction.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `board` with `active` to move.
    ///
    /// Ties keep the first move found in ascending square order.
    pub fn search(&mut self, board: &mut Board, active: Player) -> SearchResult {
        self.nodes += 1;

        let previous = active.opponent();
        if board.last_winner() == Some(previous) {
            let magnitude = board.num_empty_squares() as i32 + 1;
            return SearchResult::terminal(if previous == self.self_player {
                magnitude
            } else {
                -magnitude
            });
        }
        if !board.empty_squares() {
            return SearchResult::terminal(0);
        }

        let maximizing = active == self.self_player;
        let mut best = SearchResult::terminal(if maximizing { i32::MIN } else { i32::MAX });

        for index in board.available_moves() {
            let applied = board.make_move(index, active);
            debug_assert!(applied.is_ok(), "generated move {index} must be legal");

            let mut candidate = self.search(board, previous);
            board.undo_move(index);
            candidate.position = Some(index);

            let improves = if maximizing {
                candidate.score > best.score
            } else {
                candidate.score < best.score
            };
            if improves {
                best = candidate;
            }
        }

        best
    }
}

/// Runs a full search from `board` with `active` to move, scoring for
/// `self_player`.
///
/// The board is restored before returning.
#[instrument(level = "debug", skip(board), fields(empty = board.num_empty_squares()))]
pub fn minimax(board: &mut Board, active: Player, self_player: Player) -> SearchResult {
    let mut searcher = Minimax::new(self_player);
    let result = searcher.search(board, active);
    debug!(
        nodes = searcher.nodes(),
        position = ?result.position,
        score = result.score,
        "Search complete"
    );
    result
}

/// Searches a copy of `board` for `player`, who is assumed to be on move.
pub fn best_move(board: &Board, player: Player) -> SearchResult {
    let mut scratch = board.clone();
    minimax(&mut scratch, player, player)
}

/// Picks a square for `self_player`.
///
/// On an empty board every opening is equally good, so a random square is
/// returned instead of walking the whole tree. Returns `None` when the
/// game is already over.
#[instrument(skip(board, rng))]
pub fn get_move<R: Rng + ?Sized>(
    board: &mut Board,
    self_player: Player,
    rng: &mut R,
) -> Option<usize> {
    let moves = board.available_moves();
    if moves.len() == SQUARE_COUNT {
        let choice = moves.choose(rng).copied();
        debug!(position = ?choice, "Random opening move");
        return choice;
    }
    minimax(board, self_player, self_player).position
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(s: &str) -> Board {
        s.parse().expect("test board should parse")
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("XX.OO....");
        let result = minimax(&mut b, Player::O, Player::O);
        assert_eq!(result.position, Some(5));
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens the top row; O has nothing of its own.
        let mut b = board("XX..O....");
        let result = minimax(&mut b, Player::O, Player::O);
        assert_eq!(result.position, Some(2));
    }

    #[test]
    fn test_last_square_draw() {
        let mut b = board("XOXXOOOX.");
        let result = minimax(&mut b, Player::X, Player::X);
        assert_eq!(result, SearchResult { position: Some(8), score: 0 });
    }

    #[test]
    fn test_terminal_win_scored_for_self() {
        let mut b = board("XXXOO....");
        assert_eq!(minimax(&mut b, Player::O, Player::X).score, 5);
        assert_eq!(minimax(&mut b, Player::O, Player::O).score, -5);
        assert_eq!(minimax(&mut b, Player::O, Player::O).position, None);
    }

    #[test]
    fn test_full_board_is_zero() {
        let mut b = board("XOXOXOOXO");
        assert_eq!(
            minimax(&mut b, Player::X, Player::X),
            SearchResult { position: None, score: 0 }
        );
    }

    #[test]
    fn test_prefers_faster_win() {
        // O can win now at 2 (row 0) or set up later wins elsewhere.
        let mut b = board("OO.XX.X..");
        let result = minimax(&mut b, Player::O, Player::O);
        assert_eq!(result.position, Some(2));
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_node_count_grows_with_empty_squares() {
        let mut small = board("XOXXOOOX.");
        let mut searcher = Minimax::new(Player::X);
        assert_eq!(searcher.self_player(), Player::X);
        assert_eq!(searcher.nodes(), 0);
        searcher.search(&mut small, Player::X);
        assert_eq!(searcher.nodes(), 2);

        let mut larger = board("XO.......");
        let mut searcher = Minimax::new(Player::X);
        searcher.search(&mut larger, Player::X);
        assert!(searcher.nodes() > 1_000);
    }

    #[test]
    fn test_get_move_on_empty_board_is_any_square() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let mut b = Board::new();
            let position = get_move(&mut b, Player::X, &mut rng);
            assert!(matches!(position, Some(p) if p < 9));
            assert_eq!(b, Board::new());
        }
    }

    #[test]
    fn test_get_move_none_when_game_over() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut b = board("XXXOO....");
        assert_eq!(get_move(&mut b, Player::O, &mut rng), None);
    }

    #[test]
    fn test_best_move_leaves_input_alone() {
        let b = board("X...O....");
        let before = b.clone();
        let result = best_move(&b, Player::X);
        assert!(result.position.is_some());
        assert_eq!(b, before);
    }
}
