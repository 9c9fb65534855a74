//! Win condition checking for Tic-Tac-Toe
//!
//! A mark wins by owning all three cells of one of the eight lines:
//! three rows, three columns and the two diagonals.

use crate::board::{Board, Mark, Pos};

/// Which of the eight lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(u8),
    Column(u8),
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

/// One of the eight winning lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub kind: LineKind,
    /// Cells in drawing order; the first and last are the line's endpoints.
    pub cells: [Pos; 3],
}

impl Line {
    const fn new(kind: LineKind, cells: [(u8, u8); 3]) -> Self {
        Self {
            kind,
            cells: [
                Pos { row: cells[0].0, col: cells[0].1 },
                Pos { row: cells[1].0, col: cells[1].1 },
                Pos { row: cells[2].0, col: cells[2].1 },
            ],
        }
    }

    /// Bitboard mask of the line's cells
    #[inline]
    pub fn mask(&self) -> u16 {
        self.cells.iter().fold(0, |acc, p| acc | (1u16 << p.to_index()))
    }

    /// First and last cell, for drawing a stroke through the line
    pub fn endpoints(&self) -> (Pos, Pos) {
        (self.cells[0], self.cells[2])
    }
}

/// All eight lines: rows, then columns, then diagonals
pub const LINES: [Line; 8] = [
    Line::new(LineKind::Row(0), [(0, 0), (0, 1), (0, 2)]),
    Line::new(LineKind::Row(1), [(1, 0), (1, 1), (1, 2)]),
    Line::new(LineKind::Row(2), [(2, 0), (2, 1), (2, 2)]),
    Line::new(LineKind::Column(0), [(0, 0), (1, 0), (2, 0)]),
    Line::new(LineKind::Column(1), [(0, 1), (1, 1), (2, 1)]),
    Line::new(LineKind::Column(2), [(0, 2), (1, 2), (2, 2)]),
    Line::new(LineKind::Diagonal, [(0, 0), (1, 1), (2, 2)]),
    Line::new(LineKind::AntiDiagonal, [(0, 2), (1, 1), (2, 0)]),
];

/// Does `mark` own a complete line? Pure; the board is not touched.
#[inline]
pub fn has_winner(board: &Board, mark: Mark) -> bool {
    let owned = board.marks(mark);
    LINES.iter().any(|line| owned.contains_all(line.mask()))
}

/// The first line (in [`LINES`] order) completed by `mark`.
///
/// Presentation query: only meaningful right after `has_winner` returned
/// true for the same mark.
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    let owned = board.marks(mark);
    LINES.iter().copied().find(|line| owned.contains_all(line.mask()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 3]) -> Board {
        Board::from_rows(rows).expect("valid test board")
    }

    #[test]
    fn test_line_masks_are_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            assert_eq!(a.mask().count_ones(), 3);
            for b in &LINES[i + 1..] {
                assert_ne!(a.mask(), b.mask());
            }
        }
    }

    #[test]
    fn test_row_win() {
        let b = board(["...", "OOO", "XX."]);
        assert!(has_winner(&b, Mark::O));
        assert!(!has_winner(&b, Mark::X));
        assert_eq!(winning_line(&b, Mark::O).map(|l| l.kind), Some(LineKind::Row(1)));
    }

    #[test]
    fn test_column_win() {
        let b = board(["..X", "O.X", "O.X"]);
        assert!(has_winner(&b, Mark::X));
        assert_eq!(
            winning_line(&b, Mark::X).map(|l| l.kind),
            Some(LineKind::Column(2))
        );
    }

    #[test]
    fn test_diagonal_win() {
        let b = board(["X.O", ".X.", "O.X"]);
        let line = winning_line(&b, Mark::X).unwrap();
        assert_eq!(line.kind, LineKind::Diagonal);
        assert_eq!(line.endpoints(), (Pos::new(0, 0), Pos::new(2, 2)));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let b = board(["X.O", "XO.", "O.X"]);
        let line = winning_line(&b, Mark::O).unwrap();
        assert_eq!(line.kind, LineKind::AntiDiagonal);
        assert_eq!(line.endpoints(), (Pos::new(0, 2), Pos::new(2, 0)));
    }

    #[test]
    fn test_two_in_a_row_not_win() {
        let b = board(["XX.", "...", "..."]);
        assert!(!has_winner(&b, Mark::X));
        assert_eq!(winning_line(&b, Mark::X), None);
    }

    #[test]
    fn test_has_winner_is_pure() {
        let b = board(["OOO", "XX.", "X.."]);
        let before = b.clone();
        assert!(has_winner(&b, Mark::O));
        assert!(!has_winner(&b, Mark::X));
        assert_eq!(b, before);
    }
}
