//! Fluent builder for constructing arbitrary positions.
//!
//! Allows creating positions disc by disc rather than replaying move sequences.
//! Built boards need not be reachable from the starting position, which is
//! what evaluation and search tests want.
//!
//! # Example
//! ```
//! use othello_engine::board::{BoardBuilder, Player, Square};
//!
//! let board = BoardBuilder::new()
//!     .disc(Square(0, 0), Player::Black)
//!     .row(1, "WW......")
//!     .build();
//! assert_eq!(board.count(Player::White), 2);
//! ```

use super::{Board, Cell, Player, Square, BOARD_SIZE};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    discs: Vec<(Square, Cell)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { discs: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder::new()
            .disc(Square(3, 3), Player::White)
            .disc(Square(3, 4), Player::Black)
            .disc(Square(4, 3), Player::Black)
            .disc(Square(4, 4), Player::White)
    }

    /// Place a disc, replacing whatever the square held.
    #[must_use]
    pub fn disc(mut self, square: Square, player: Player) -> Self {
        self.discs.retain(|(sq, _)| *sq != square);
        self.discs.push((square, player.disc()));
        self
    }

    /// Remove a disc from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.discs.retain(|(sq, _)| *sq != square);
        self
    }

    /// Fill one row from an 8-symbol pattern (`.`, `B`, `W`). Unknown
    /// symbols and columns past the eighth are ignored.
    #[must_use]
    pub fn row(mut self, row: usize, pattern: &str) -> Self {
        for (col, c) in pattern.chars().take(BOARD_SIZE).enumerate() {
            let square = Square(row, col);
            self.discs.retain(|(sq, _)| *sq != square);
            if let Some(cell) = Cell::from_symbol(c).filter(|cell| !cell.is_empty()) {
                self.discs.push((square, cell));
            }
        }
        self
    }

    /// Build the board.
    ///
    /// Squares outside the grid are skipped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, cell) in self.discs {
            if square.0 < BOARD_SIZE && square.1 < BOARD_SIZE {
                board.put(square, cell);
            }
        }
        board
    }
}
