//! Search module for the Tic-Tac-Toe AI
//!
//! Contains the exhaustive minimax search. The game tree of a 3x3 board is
//! small enough to walk completely, so there is no depth limit, pruning or
//! caching.

pub mod minimax;

pub use minimax::{SearchResult, Searcher, WIN_SCORE};
