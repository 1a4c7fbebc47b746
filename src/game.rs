//! Turn sequencing for a single game.
//!
//! A [`Game`] owns the current board and the player to move. Each turn is
//! either a placement or a forced pass; the game is over once neither side
//! can move.

use std::fmt;

use crate::board::{Board, MoveError, Outcome, Player, Square};

/// Where the game stands for the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The player to move has at least one legal move
    Ongoing,
    /// The player to move has no legal move but the opponent does
    MustPass,
    /// Neither player can move
    Terminal,
}

/// One recorded turn. `square` is `None` for a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub square: Option<Square>,
}

impl Turn {
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.square.is_none()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.square {
            Some(sq) => write!(f, "{} {}", self.player, sq),
            None => write!(f, "{} pass", self.player),
        }
    }
}

/// Error type for rejected game actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The placement is not legal on the current board
    IllegalMove(MoveError),
    /// A pass was requested while the player to move still has a legal move
    PassNotAllowed { player: Player },
    /// No further turns can be taken
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(e) => write!(f, "{e}"),
            GameError::PassNotAllowed { player } => {
                write!(f, "{player} has a legal move and cannot pass")
            }
            GameError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::IllegalMove(e)
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Turn>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    #[must_use]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Game {
            board,
            to_move,
            history: Vec::with_capacity(64),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Disc tally as `(black, white)`.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.board.has_legal_move(self.to_move) {
            GameStatus::Ongoing
        } else if self.board.has_legal_move(self.to_move.opponent()) {
            GameStatus::MustPass
        } else {
            GameStatus::Terminal
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() == GameStatus::Terminal
    }

    /// Place a disc for the player to move and hand the turn over.
    pub fn play(&mut self, sq: Square) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.board = self.board.try_apply_move(sq, self.to_move)?;
        self.history.push(Turn {
            player: self.to_move,
            square: Some(sq),
        });
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Forfeit the turn. Only allowed when the player to move has no legal
    /// move; the board is left untouched.
    pub fn pass(&mut self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::Ongoing => Err(GameError::PassNotAllowed {
                player: self.to_move,
            }),
            GameStatus::Terminal => Err(GameError::GameOver),
            GameStatus::MustPass => {
                self.history.push(Turn {
                    player: self.to_move,
                    square: None,
                });
                self.to_move = self.to_move.opponent();
                Ok(())
            }
        }
    }

    /// `None` while the game is running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// The winning player once the game is over; `None` while running or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(Outcome::Win(player)) => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }
}
