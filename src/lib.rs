//! Tic-Tac-Toe with a perfect minimax opponent
//!
//! A 3x3 game engine with an exhaustive minimax search and a desktop front
//! end:
//! - X always moves first, players alternate
//! - Three in a row, column or diagonal wins
//! - A full board without a line is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards, placement and undo
//! - [`rules`]: Win and draw detection
//! - [`search`]: Exhaustive minimax over the shared board
//! - [`engine`]: Search facade with timing and statistics
//! - [`player`]: The `Player` trait with human and computer players
//! - [`ui`]: Game session and egui front end
//! - [`config`] / [`error`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! board.place(0, 0, Mark::X);
//!
//! // Computer responds as O
//! if let Some(pos) = engine.get_move(&mut board, Mark::O) {
//!     board.place_at(pos, Mark::O);
//!     assert_eq!(pos, Pos::new(1, 1));
//! }
//! ```
//!
//! # Search
//!
//! Every empty cell is tried in row-major order and the game tree is
//! explored to the end. A win scores `10 - depth`, a loss `depth - 10` and
//! a draw `0`, so the engine wins as fast and loses as slowly as possible.
//! Ties go to the earliest cell. The board is never cloned: hypothetical
//! moves are placed and undone in place.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{AIEngine, MoveResult};
pub use player::{ComputerPlayer, HumanPlayer, Player, PointerInput};
pub use rules::GameOutcome;
