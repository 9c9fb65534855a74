//! AI engine wrapping the minimax search
//!
//! The engine owns a [`Searcher`] and adds timing and logging on top of it.
//! It never commits a move: the board comes back exactly as it went in, and
//! the caller decides whether to play the suggested cell.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::from_rows(["OO.", "X..", "X.."]).unwrap();
//!
//! // X must block the top row
//! let result = engine.get_move_with_stats(&mut board, Mark::X);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! println!("Score: {}, nodes: {}, time: {}us", result.score, result.nodes, result.time_us);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Mark the search was run for
    pub mark: Mark,
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: i32,
    /// Time taken in microseconds
    pub time_us: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(mark: Mark, result: SearchResult, time_us: u64) -> Self {
        Self {
            mark,
            best_move: result.best_move,
            score: result.score,
            time_us,
            nodes: result.nodes,
        }
    }

    /// Human-readable verdict for the score
    pub fn verdict(&self) -> &'static str {
        match self.score {
            s if s > 0 => "forced win",
            s if s < 0 => "forced loss",
            _ => "draw",
        }
    }
}

/// Main AI engine for Tic-Tac-Toe.
///
/// There is nothing to configure: the search always walks the whole game
/// tree and plays perfectly.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Get the best move for `mark`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, mark: Mark) -> Option<Pos> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board, mark: Mark) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, mark);
        let time_us = start.elapsed().as_micros() as u64;

        debug!(
            %mark,
            board = %board,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_us,
            "minimax search finished"
        );

        MoveResult::from_search(mark, result, time_us)
    }

    /// Score of every legal move for `mark`, in row-major order.
    #[must_use]
    pub fn score_moves(&mut self, board: &mut Board, mark: Mark) -> Vec<(Pos, i32)> {
        self.searcher.score_moves(board, mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::from_rows(["XX.", "...", "..."]).unwrap();
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&mut board, Mark::X);

        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.mark, Mark::X);
        assert_eq!(result.verdict(), "forced win");
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::from_rows(["OO.", "...", "..."]).unwrap();
        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&mut board, Mark::X), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_engine_does_not_commit() {
        let mut board = Board::from_rows(["X..", "...", "..."]).unwrap();
        let before = board.clone();
        let mut engine = AIEngine::new();
        let _ = engine.get_move(&mut board, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&mut board, Mark::X);
        assert!(result.best_move.is_none());
        assert_eq!(result.verdict(), "draw");
    }

    #[test]
    fn test_engine_answers_corner_with_center() {
        // The only drawing replies to a corner opening are the center
        let mut board = Board::from_rows(["X..", "...", "..."]).unwrap();
        let mut engine = AIEngine::new();
        let scores = engine.score_moves(&mut board, Mark::O);
        let drawing: Vec<Pos> = scores
            .iter()
            .filter(|(_, s)| *s == 0)
            .map(|(p, _)| *p)
            .collect();
        assert_eq!(drawing, vec![Pos::new(1, 1)]);
        assert_eq!(engine.get_move(&mut board, Mark::O), Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::new();
        let mut board = Board::from_rows(["X..", ".O.", "..X"]).unwrap();

        let first = engine.get_move(&mut board, Mark::O);
        let second = engine.get_move(&mut board, Mark::O);
        assert_eq!(first, second);
    }
}
