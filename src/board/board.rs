//! Board structure with placement and undo

use super::bitboard::Bitboard;
use super::{Cell, Mark, Pos, BOARD_SIZE};
use crate::rules::{self, Line};

/// 3x3 game board.
///
/// Each mark owns a [`Bitboard`]; a cell is empty when neither has it set.
/// The board is the single mutable resource of a session: the search
/// explores hypothetical moves on it with `place` / `undo` pairs and never
/// clones it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    x: Bitboard,
    o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Build a board from three row strings, e.g. `["XX.", "...", "..O"]`.
    ///
    /// `X`/`O` are marks; `.`, `_` and space are empty. Returns `None` on any
    /// other character or a row that is not exactly three cells long.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != BOARD_SIZE {
                return None;
            }
            for (c, ch) in cells.into_iter().enumerate() {
                match ch {
                    '.' | '_' | ' ' => {}
                    other => {
                        let mark = Mark::from_symbol(&other.to_string())?;
                        board.place(r, c, mark);
                    }
                }
            }
        }
        Some(board)
    }

    /// Place `mark` at (`row`, `col`).
    ///
    /// Returns `false` without touching the board when the coordinate is out
    /// of range or the cell is already occupied.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match Pos::checked(row, col) {
            Some(pos) => self.place_at(pos, mark),
            None => false,
        }
    }

    /// [`Board::place`] for an already validated position.
    #[inline]
    pub fn place_at(&mut self, pos: Pos, mark: Mark) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.marks_mut(mark).set(pos);
        true
    }

    /// Clear the cell at (`row`, `col`).
    ///
    /// # Contract
    ///
    /// Only call this on a cell you placed yourself, inside the same search
    /// frame. Nothing is validated: undoing an empty cell is a no-op and
    /// undoing a cell owned by someone else silently erases their mark.
    /// Out-of-range coordinates are ignored.
    pub fn undo(&mut self, row: usize, col: usize) {
        if let Some(pos) = Pos::checked(row, col) {
            self.undo_at(pos);
        }
    }

    /// [`Board::undo`] for an already validated position.
    #[inline]
    pub fn undo_at(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.x = Bitboard::new();
        self.o = Bitboard::new();
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.x.get(pos) {
            Cell::Occupied(Mark::X)
        } else if self.o.get(pos) {
            Cell::Occupied(Mark::O)
        } else {
            Cell::Empty
        }
    }

    /// Get cell at (`row`, `col`). Panics on out-of-range coordinates.
    pub fn get_cell(&self, row: usize, col: usize) -> Cell {
        assert!(Pos::is_valid(row, col), "cell ({row}, {col}) is off the board");
        self.get(Pos::new(row as u8, col as u8))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Bitboard of the given mark
    #[inline]
    pub fn marks(&self, mark: Mark) -> &Bitboard {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    #[inline]
    fn marks_mut(&mut self, mark: Mark) -> &mut Bitboard {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Bitboard of empty cells
    #[inline]
    pub fn empty(&self) -> Bitboard {
        self.x.union(self.o).complement()
    }

    /// All empty cells in row-major scan order.
    ///
    /// The order is load-bearing: the search breaks ties between equally
    /// scored moves in favour of the earlier cell.
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.empty().iter_ones().collect()
    }

    /// Number of occupied cells
    #[inline]
    pub fn occupied_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Does `mark` own a complete line?
    #[inline]
    pub fn has_winner(&self, mark: Mark) -> bool {
        rules::has_winner(self, mark)
    }

    /// The line `mark` completed, for highlighting.
    pub fn winning_line(&self, mark: Mark) -> Option<Line> {
        rules::winning_line(self, mark)
    }

    /// True when no cell is empty. Only meaningful once neither mark has won.
    #[inline]
    pub fn is_draw(&self) -> bool {
        rules::is_full(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            if row > 0 {
                write!(f, " / ")?;
            }
            for col in 0..BOARD_SIZE as u8 {
                let ch = match self.get(Pos::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Occupied(mark) => mark.symbol(),
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
