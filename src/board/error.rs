//! Error types for board operations.

use std::fmt;

/// Error type for rejected move applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the 8x8 grid
    OutOfBounds { row: i32, col: i32 },
    /// The target square already holds a disc
    Occupied { row: usize, col: usize },
    /// The placement brackets no opponent disc in any direction
    NoFlips { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Illegal move ({row}, {col}): off the board")
            }
            MoveError::Occupied { row, col } => {
                write!(f, "Illegal move ({row}, {col}): square is occupied")
            }
            MoveError::NoFlips { row, col } => {
                write!(f, "Illegal move ({row}, {col}): no discs would be flipped")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column out of bounds (must be 0-7)
    OutOfBounds { row: i32, col: i32 },
    /// Input is neither `row col` nor algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board snapshot parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Snapshot does not contain exactly 64 cells
    WrongLength { found: usize },
    /// Unknown cell symbol
    InvalidSymbol { char: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongLength { found } => {
                write!(f, "Board snapshot must have 64 cells, found {found}")
            }
            BoardParseError::InvalidSymbol { char } => {
                write!(f, "Invalid cell symbol '{char}' in board snapshot")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// Error type for evaluation profile lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No built-in profile has this name
    Unknown { name: String },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Unknown { name } => write!(
                f,
                "Unknown evaluation profile '{name}' (expected balanced, mobility, corners or positional)"
            ),
        }
    }
}

impl std::error::Error for ProfileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::Occupied { row: 3, col: 4 };
        assert!(err.to_string().contains("(3, 4)"));
        assert!(err.to_string().contains("occupied"));

        let err = MoveError::OutOfBounds { row: -1, col: 9 };
        assert!(err.to_string().contains("(-1, 9)"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_board_parse_error_length() {
        let err = BoardParseError::WrongLength { found: 63 };
        assert!(err.to_string().contains("63"));
    }

    #[test]
    fn test_profile_error_names_input() {
        let err = ProfileError::Unknown {
            name: "aggressive".to_string(),
        };
        assert!(err.to_string().contains("'aggressive'"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::NoFlips { row: 0, col: 0 };
        assert_eq!(err.clone(), err);
    }
}
