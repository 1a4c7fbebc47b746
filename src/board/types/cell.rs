//! Cell and player types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides. Black always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players in index order
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// The side that moves after this one.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    /// The disc this player places.
    #[inline]
    #[must_use]
    pub const fn disc(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Board symbol: `B` or `W`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Contents of one board square.
///
/// The discriminants double as the ternary digit used by edge encoding
/// (Empty=0, Black=1, White=2).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Cell {
    /// Ternary digit for edge encoding.
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Cell::digit`]; any value above 2 maps to `None`.
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Cell> {
        match digit {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            _ => None,
        }
    }

    /// The owner of this disc, if any.
    #[inline]
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Swap Black and White, leaving Empty fixed.
    #[inline]
    #[must_use]
    pub const fn inverted(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
        }
    }

    /// Text symbol: `.`, `B` or `W`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    /// Parse a text symbol (case-insensitive for discs).
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.disc()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
