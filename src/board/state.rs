use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardParseError;
use super::{Cell, Player, Square, BOARD_SIZE};

/// An 8x8 Othello position.
///
/// `Board` is a plain `Copy` value: every search branch works on its own
/// copy, so no grid is ever shared between sibling evaluations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) counts: [u8; 2], // [black, white]
}

impl Board {
    /// The standard starting position: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.put(Square(3, 3), Cell::White);
        board.put(Square(3, 4), Cell::Black);
        board.put(Square(4, 3), Cell::Black);
        board.put(Square(4, 4), Cell::White);
        board
    }

    /// A board with no discs at all.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            counts: [0, 0],
        }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.0][sq.1]
    }

    /// Cell lookup by raw coordinates; `None` when off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite a square, keeping the disc counts in step.
    pub(crate) fn put(&mut self, sq: Square, cell: Cell) {
        let previous = self.cells[sq.0][sq.1];
        if let Some(owner) = previous.player() {
            self.counts[owner.index()] -= 1;
        }
        if let Some(owner) = cell.player() {
            self.counts[owner.index()] += 1;
        }
        self.cells[sq.0][sq.1] = cell;
    }

    /// Number of discs `player` has on the board.
    #[inline]
    #[must_use]
    pub fn count(&self, player: Player) -> u32 {
        u32::from(self.counts[player.index()])
    }

    /// Total discs of both colours.
    #[inline]
    #[must_use]
    pub fn disc_count(&self) -> u32 {
        self.count(Player::Black) + self.count(Player::White)
    }

    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> u32 {
        (BOARD_SIZE * BOARD_SIZE) as u32 - self.disc_count()
    }

    /// Disc differential from `player`'s side.
    #[must_use]
    pub fn disc_difference(&self, player: Player) -> i32 {
        self.count(player) as i32 - self.count(player.opponent()) as i32
    }

    /// The four border lines: top row, bottom row, left column, right column,
    /// each read in increasing index order.
    #[must_use]
    pub fn edges(&self) -> [[Cell; BOARD_SIZE]; 4] {
        let mut edges = [[Cell::Empty; BOARD_SIZE]; 4];
        for i in 0..BOARD_SIZE {
            edges[0][i] = self.cells[0][i];
            edges[1][i] = self.cells[BOARD_SIZE - 1][i];
            edges[2][i] = self.cells[i][0];
            edges[3][i] = self.cells[i][BOARD_SIZE - 1];
        }
        edges
    }

    /// 64-character row-major snapshot using `.`, `B` and `W`.
    #[must_use]
    pub fn to_compact(&self) -> String {
        self.cells.iter().flatten().map(|c| c.symbol()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Parses a 64-cell snapshot; whitespace (including newlines between rows) is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardParseError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Board::empty();
        for (idx, &c) in symbols.iter().enumerate() {
            let cell = Cell::from_symbol(c).ok_or(BoardParseError::InvalidSymbol { char: c })?;
            board.put(Square::from_index(idx), cell);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
