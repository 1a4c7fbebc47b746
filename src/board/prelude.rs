//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use othello_engine::board::prelude::*;
//! ```

pub use super::{
    find_best_move, find_best_move_with, Board, BoardBuilder, Cell, EvalProfile, MoveError,
    Outcome, Player, SearchParams, SearchResult, Square,
};
