//! Othello board representation, move rules, evaluation and search.
//!
//! `Board` is a small `Copy` value; applying a move returns a new board and
//! leaves the original untouched, which is what lets the search hand each
//! branch its own position.
//!
//! # Example
//! ```
//! use othello_engine::board::{find_best_move, Board, Player, Square};
//!
//! let board = Board::new();
//! assert_eq!(board.legal_moves(Player::Black).len(), 4);
//!
//! let next = board.apply_move(Square(2, 3), Player::Black);
//! assert_eq!(next.count(Player::Black), 4);
//!
//! let result = find_best_move(&next, Player::White, 3);
//! assert!(result.best_move.is_some());
//! ```

mod builder;
mod error;
pub mod eval;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardParseError, MoveError, ProfileError, SquareError};
pub use movegen::Outcome;
pub use state::Board;
pub use types::{Cell, Direction, MoveList, MoveListIntoIter, Player, Square, BOARD_SIZE};

// Public API - evaluation and search
pub use eval::{evaluate, EdgeStabilityTable, EvalProfile, Evaluator};
pub use search::{
    find_best_move, find_best_move_with, SearchParams, SearchResult, SearchStats, Searcher,
    DEFAULT_DEPTH,
};
