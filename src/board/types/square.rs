//! Square and direction types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, col) with (0, 0) in the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// The four corner squares.
    pub const CORNERS: [Square; 4] = [Square(0, 0), Square(0, 7), Square(7, 0), Square(7, 7)];

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Bounds-checked constructor for signed coordinates (caller input may be negative).
    #[must_use]
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Square::new(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// Create a square from a row-major index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    #[inline]
    #[must_use]
    pub fn is_corner(self) -> bool {
        Square::CORNERS.contains(&self)
    }

    /// The neighbouring square one step in `dir`, or `None` past the edge.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Square> {
        let row = self.0 as i32 + dir.dr;
        let col = self.1 as i32 + dir.dc;
        Square::from_signed(row, col)
    }

    /// Iterator over the squares from this one (exclusive) to the edge in `dir`.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Square> {
        std::iter::successors(self.step(dir), move |sq| sq.step(dir))
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// Parses either `"row col"` (digits 0-7, whitespace or comma separated) or
/// algebraic notation such as `"d3"` (column letter, row number 1-8).
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let invalid = || SquareError::InvalidNotation {
                    notation: trimmed.to_string(),
                };
                let row: i32 = row.parse().map_err(|_| invalid())?;
                let col: i32 = col.parse().map_err(|_| invalid())?;
                Square::from_signed(row, col).ok_or(SquareError::OutOfBounds { row, col })
            }
            [single] => parse_algebraic(single),
            _ => Err(SquareError::InvalidNotation {
                notation: trimmed.to_string(),
            }),
        }
    }
}

fn parse_algebraic(s: &str) -> Result<Square, SquareError> {
    let invalid = || SquareError::InvalidNotation {
        notation: s.to_string(),
    };
    let mut chars = s.chars();
    let file = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
    let rank: i32 = chars.as_str().parse().map_err(|_| invalid())?;
    if !file.is_ascii_lowercase() {
        return Err(invalid());
    }
    let col = file as i32 - 'a' as i32;
    let row = rank - 1;
    Square::from_signed(row, col).ok_or(SquareError::OutOfBounds { row, col })
}

/// One of the eight compass offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

impl Direction {
    pub const NORTH: Direction = Direction { dr: -1, dc: 0 };
    pub const SOUTH: Direction = Direction { dr: 1, dc: 0 };
    pub const WEST: Direction = Direction { dr: 0, dc: -1 };
    pub const EAST: Direction = Direction { dr: 0, dc: 1 };
    pub const NORTH_WEST: Direction = Direction { dr: -1, dc: -1 };
    pub const SOUTH_EAST: Direction = Direction { dr: 1, dc: 1 };
    pub const NORTH_EAST: Direction = Direction { dr: -1, dc: 1 };
    pub const SOUTH_WEST: Direction = Direction { dr: 1, dc: -1 };

    /// All eight directions, paired by axis: each even index is followed by its reverse.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::WEST,
        Direction::EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::NORTH_EAST,
        Direction::SOUTH_WEST,
    ];

    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Direction {
        Direction {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}
