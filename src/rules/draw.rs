//! Draw detection

use crate::board::Board;

/// True when every cell is occupied.
///
/// A full board is a draw only once neither mark has a line, so callers
/// check for a winner first.
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.empty().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_gap_not_full() {
        let board = Board::from_rows(["XOX", "XOO", "OX."]).unwrap();
        assert!(!is_full(&board));
        assert!(!board.is_draw());
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        // X O X / X O O / O X X
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        assert!(!board.has_winner(Mark::X));
        assert!(!board.has_winner(Mark::O));
        assert!(board.is_draw());
    }

    #[test]
    fn test_single_mark_everywhere_but_one() {
        // Mark distribution does not matter, only the gap
        let mut board = Board::new();
        for idx in 0..8 {
            let pos = crate::board::Pos::from_index(idx);
            board.place_at(pos, Mark::O);
        }
        assert!(!is_full(&board));
    }
}
