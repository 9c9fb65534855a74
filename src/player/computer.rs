//! Search-driven player

use tracing::debug;

use super::{Player, PointerInput};
use crate::board::{Board, Mark, Pos};
use crate::engine::{AIEngine, MoveResult};

/// Computer player backed by [`AIEngine`]. Ignores pointer input.
#[derive(Debug)]
pub struct ComputerPlayer {
    mark: Mark,
    name: String,
    engine: AIEngine,
    last_result: Option<MoveResult>,
}

impl ComputerPlayer {
    #[must_use]
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
            engine: AIEngine::new(),
            last_result: None,
        }
    }

    /// Statistics of the last move this player searched for
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }
}

impl Player for ComputerPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(&mut self, board: &mut Board, _input: &PointerInput) -> Option<Pos> {
        let result = self.engine.get_move_with_stats(board, self.mark);
        let pos = result.best_move;
        self.last_result = Some(result);

        let pos = pos?;
        if board.place_at(pos, self.mark) {
            debug!(player = %self.name, mark = %self.mark, ?pos, "computer move");
            Some(pos)
        } else {
            None
        }
    }
}
