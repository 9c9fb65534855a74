//! Players: who decides the next move
//!
//! The session asks whichever player is to move for a decision once per
//! frame. A decision either commits exactly one mark to the board and
//! returns its position, or leaves the board alone and returns `None`.

pub mod computer;
pub mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::board::{Board, Mark, Pos};

/// Pointer state for the current frame, already mapped to board cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerInput {
    /// Cell under the pointer when the primary button is down
    pub pressed: Option<Pos>,
    /// Is the primary button held this frame
    pub held: bool,
}

impl PointerInput {
    /// No button activity
    pub const IDLE: PointerInput = PointerInput {
        pressed: None,
        held: false,
    };

    /// Button down over `pos`
    #[inline]
    pub fn press(pos: Pos) -> Self {
        Self {
            pressed: Some(pos),
            held: true,
        }
    }
}

/// A participant in the game.
pub trait Player {
    /// Mark this player places
    fn mark(&self) -> Mark;

    /// Display name
    fn name(&self) -> &str;

    /// Try to make a move.
    ///
    /// On success the mark is already on the board and its position is
    /// returned. `None` means nothing was placed this frame.
    fn decide_move(&mut self, board: &mut Board, input: &PointerInput) -> Option<Pos>;
}
