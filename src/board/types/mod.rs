//! Core board types.
//!
//! - `Cell` and `Player` - square contents and the two sides
//! - `Square` and `Direction` - coordinates and the eight compass offsets
//! - `MoveList` - legal placements in scan order

mod cell;
mod moves;
mod square;

pub use cell::{Cell, Player};
pub use moves::{MoveList, MoveListIntoIter};
pub use square::{Direction, Square, BOARD_SIZE};
