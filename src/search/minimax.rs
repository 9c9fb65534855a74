//! Exhaustive minimax search
//!
//! The search explores the full game tree on the caller's board. Every
//! hypothetical move is made through a `Speculation` guard that undoes it
//! when dropped, so the board is back in its starting state on every exit
//! path of every frame.
//!
//! # Scoring
//!
//! Scores are from the searching mark's point of view, evaluated before a
//! node is expanded:
//! - searching mark has a line: `WIN_SCORE - depth`
//! - opponent has a line: `depth - WIN_SCORE`
//! - board full: `0`
//!
//! Depth is 0 at the root and grows by one per ply, so faster wins and
//! slower losses score better.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::from_rows(["XX.", "OO.", "..."]).unwrap();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.search(&mut board, Mark::X);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Mark, Pos};

/// Score of a win found at the root
pub const WIN_SCORE: i32 = 10;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Score of the best move (0 when there is no move)
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
}

/// A mark placed for evaluation only, removed again on drop.
///
/// Derefs to the board so the recursion can keep working on it while the
/// placement is live.
struct Speculation<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Speculation<'a> {
    fn place(board: &'a mut Board, pos: Pos, mark: Mark) -> Self {
        let placed = board.place_at(pos, mark);
        debug_assert!(placed, "speculative move on occupied cell {pos:?}");
        Self { board, pos }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.undo_at(self.pos);
    }
}

/// Minimax searcher. Holds only per-search statistics.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the best move for `mark`.
    ///
    /// Empty cells are tried in row-major order and a later move only
    /// replaces the running best when it scores strictly higher, so ties go
    /// to the earliest cell. The board is left exactly as it was passed in;
    /// committing the move is up to the caller.
    #[must_use]
    pub fn search(&mut self, board: &mut Board, mark: Mark) -> SearchResult {
        self.nodes = 0;

        let mut best_move = None;
        let mut best_score = i32::MIN;

        let empties = board.empty();
        for pos in empties.iter_ones() {
            let score = self.evaluate_root_move(board, pos, mark);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
        }
    }

    /// Score every legal move for `mark`, in row-major order.
    ///
    /// Same scores as [`Searcher::search`] sees at the root.
    #[must_use]
    pub fn score_moves(&mut self, board: &mut Board, mark: Mark) -> Vec<(Pos, i32)> {
        self.nodes = 0;

        let empties = board.empty();
        empties
            .iter_ones()
            .map(|pos| (pos, self.evaluate_root_move(board, pos, mark)))
            .collect()
    }

    fn evaluate_root_move(&mut self, board: &mut Board, pos: Pos, mark: Mark) -> i32 {
        let mut child = Speculation::place(board, pos, mark);
        self.minimax(&mut child, mark, 1, false)
    }

    /// Score the position for `me` with `depth` plies already played.
    fn minimax(&mut self, board: &mut Board, me: Mark, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        let opponent = me.opponent();

        if board.has_winner(me) {
            return WIN_SCORE - depth;
        }
        if board.has_winner(opponent) {
            return depth - WIN_SCORE;
        }
        if board.is_draw() {
            return 0;
        }

        let (mover, mut best) = if maximizing {
            (me, i32::MIN)
        } else {
            (opponent, i32::MAX)
        };

        let empties = board.empty();
        for pos in empties.iter_ones() {
            let mut child = Speculation::place(board, pos, mover);
            let score = self.minimax(&mut child, me, depth + 1, !maximizing);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
