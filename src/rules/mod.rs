//! Game rules for Tic-Tac-Toe
//!
//! Pure functions over [`Board`]:
//! - Win detection (three in a row, column or diagonal)
//! - Draw detection (full board)
//! - Turn outcome, as evaluated by the game loop after each placement

pub mod draw;
pub mod win;

use crate::board::{Board, Mark};

// Re-exports for convenient access
pub use draw::is_full;
pub use win::{has_winner, winning_line, Line, LineKind, LINES};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won(Mark),
    Drawn,
}

/// Outcome after `mover` has just placed a mark.
///
/// Only the mover's lines are checked, then the draw condition. This
/// assumes the other mark cannot already hold a line, which alternating
/// legal play guarantees.
pub fn outcome_after_move(board: &Board, mover: Mark) -> Option<GameOutcome> {
    if has_winner(board, mover) {
        Some(GameOutcome::Won(mover))
    } else if is_full(board) {
        Some(GameOutcome::Drawn)
    } else {
        None
    }
}
