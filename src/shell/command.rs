//! Line parsing for the interactive shell.

use crate::board::{Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Place a disc, given as `row col` or algebraic (`d3`)
    Move(Square),
    /// Coordinates that parsed as numbers but fall outside the board
    OffBoard { row: i32, col: i32 },
    Hint,
    Board,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_shell_command(line: &str) -> Option<ShellCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_ascii_lowercase();

    let cmd = match lowered.as_str() {
        "hint" | "h" => ShellCommand::Hint,
        "board" | "b" => ShellCommand::Board,
        "help" | "?" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        _ => match lowered.parse::<Square>() {
            Ok(sq) => ShellCommand::Move(sq),
            Err(SquareError::OutOfBounds { row, col }) => ShellCommand::OffBoard { row, col },
            Err(SquareError::InvalidNotation { .. }) => ShellCommand::Unknown(trimmed.to_string()),
        },
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_shell_command("hint"), Some(ShellCommand::Hint));
        assert_eq!(parse_shell_command("  QUIT \n"), Some(ShellCommand::Quit));
        assert_eq!(parse_shell_command("help"), Some(ShellCommand::Help));
        assert_eq!(parse_shell_command("board"), Some(ShellCommand::Board));
        assert_eq!(parse_shell_command("   "), None);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_shell_command("2 3"), Some(ShellCommand::Move(Square(2, 3))));
        assert_eq!(parse_shell_command("2,3"), Some(ShellCommand::Move(Square(2, 3))));
        assert_eq!(parse_shell_command("D3"), Some(ShellCommand::Move(Square(2, 3))));
    }

    #[test]
    fn test_parse_off_board() {
        assert_eq!(
            parse_shell_command("8 0"),
            Some(ShellCommand::OffBoard { row: 8, col: 0 })
        );
        assert_eq!(
            parse_shell_command("-1 4"),
            Some(ShellCommand::OffBoard { row: -1, col: 4 })
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_shell_command("play e4 now"),
            Some(ShellCommand::Unknown("play e4 now".to_string()))
        );
        assert_eq!(
            parse_shell_command("two three"),
            Some(ShellCommand::Unknown("two three".to_string()))
        );
    }
}
