//! Pointer-driven player

use tracing::debug;

use super::{Player, PointerInput};
use crate::board::{Board, Mark, Pos};

/// Human player fed by pointer input.
///
/// Holding the button down over several frames counts as one trigger. The
/// trigger is consumed by a successful placement and re-armed once the
/// button is released, so a single click never places twice. Clicking an
/// occupied cell does not consume it.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    mark: Mark,
    name: String,
    consumed: bool,
}

impl HumanPlayer {
    #[must_use]
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
            consumed: false,
        }
    }

    /// Has the current trigger already produced a move
    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl Player for HumanPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(&mut self, board: &mut Board, input: &PointerInput) -> Option<Pos> {
        if !input.held {
            self.consumed = false;
            return None;
        }
        if self.consumed {
            return None;
        }

        let pos = input.pressed?;
        if board.place_at(pos, self.mark) {
            self.consumed = true;
            debug!(player = %self.name, mark = %self.mark, ?pos, "human move");
            Some(pos)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_places_mark() {
        let mut board = Board::new();
        let mut human = HumanPlayer::new(Mark::X, "Ada");
        let pos = Pos::new(1, 1);

        assert_eq!(human.decide_move(&mut board, &PointerInput::press(pos)), Some(pos));
        assert_eq!(board.get(pos), crate::board::Cell::Occupied(Mark::X));
        assert!(human.is_consumed());
    }

    #[test]
    fn test_no_input_no_move() {
        let mut board = Board::new();
        let mut human = HumanPlayer::new(Mark::O, "Bo");
        assert_eq!(human.decide_move(&mut board, &PointerInput::IDLE), None);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_held_button_places_once() {
        let mut board = Board::new();
        let mut human = HumanPlayer::new(Mark::X, "Ada");

        assert!(human
            .decide_move(&mut board, &PointerInput::press(Pos::new(0, 0)))
            .is_some());
        // Still held, dragged to another empty cell
        for _ in 0..5 {
            assert_eq!(
                human.decide_move(&mut board, &PointerInput::press(Pos::new(2, 2))),
                None
            );
        }
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_release_rearms() {
        let mut board = Board::new();
        let mut human = HumanPlayer::new(Mark::X, "Ada");

        human.decide_move(&mut board, &PointerInput::press(Pos::new(0, 0)));
        human.decide_move(&mut board, &PointerInput::IDLE);
        assert!(!human.is_consumed());

        let next = human.decide_move(&mut board, &PointerInput::press(Pos::new(0, 1)));
        assert_eq!(next, Some(Pos::new(0, 1)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_occupied_cell_keeps_trigger() {
        let mut board = Board::from_rows(["O..", "...", "..."]).unwrap();
        let mut human = HumanPlayer::new(Mark::X, "Ada");

        assert_eq!(
            human.decide_move(&mut board, &PointerInput::press(Pos::new(0, 0))),
            None
        );
        assert!(!human.is_consumed());

        // Sliding onto an empty cell while still held places there
        assert_eq!(
            human.decide_move(&mut board, &PointerInput::press(Pos::new(0, 1))),
            Some(Pos::new(0, 1))
        );
    }

    #[test]
    fn test_held_outside_board_is_ignored() {
        let mut board = Board::new();
        let mut human = HumanPlayer::new(Mark::X, "Ada");
        let input = PointerInput {
            pressed: None,
            held: true,
        };
        assert_eq!(human.decide_move(&mut board, &input), None);
        assert!(!human.is_consumed());
    }
}
