//! Move legality and application.
//!
//! Legality and flipping share one scan: from the placed square, walk each of
//! the eight directions over a contiguous run of opponent discs; the run is
//! bracketed (and flips) only when it ends on one of the mover's own discs.

use super::error::MoveError;
use super::{Board, Cell, Direction, MoveList, Player, Square};

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Board {
    /// Length of the opponent run bracketed in `dir`, or 0 when the run is
    /// broken by an empty square or the edge.
    fn bracketed_run(&self, sq: Square, player: Player, dir: Direction) -> usize {
        let own = player.disc();
        let theirs = player.opponent().disc();
        let mut run = 0;
        for next in sq.ray(dir) {
            let cell = self.cell(next);
            if cell == theirs {
                run += 1;
            } else if cell == own {
                return run;
            } else {
                return 0;
            }
        }
        0
    }

    /// True if `player` may place a disc on `sq`.
    #[must_use]
    pub fn is_legal_move(&self, sq: Square, player: Player) -> bool {
        if sq.0 >= 8 || sq.1 >= 8 || !self.cell(sq).is_empty() {
            return false;
        }
        Direction::ALL
            .iter()
            .any(|&dir| self.bracketed_run(sq, player, dir) > 0)
    }

    /// Legality check on raw caller coordinates; anything off the board is simply illegal.
    #[must_use]
    pub fn is_legal(&self, row: i32, col: i32, player: Player) -> bool {
        Square::from_signed(row, col).is_some_and(|sq| self.is_legal_move(sq, player))
    }

    /// All legal placements for `player` in row-major order.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        for sq in Square::all() {
            if self.is_legal_move(sq, player) {
                moves.push(sq);
            }
        }
        moves
    }

    /// Number of legal placements for `player`.
    #[must_use]
    pub fn mobility(&self, player: Player) -> usize {
        Square::all()
            .filter(|&sq| self.is_legal_move(sq, player))
            .count()
    }

    /// Stops at the first legal square found.
    #[must_use]
    pub fn has_legal_move(&self, player: Player) -> bool {
        Square::all().any(|sq| self.is_legal_move(sq, player))
    }

    /// Discs that placing on `sq` would flip; empty when the move is illegal.
    #[must_use]
    pub fn flips_for(&self, sq: Square, player: Player) -> Vec<Square> {
        if sq.0 >= 8 || sq.1 >= 8 || !self.cell(sq).is_empty() {
            return Vec::new();
        }
        let mut flips = Vec::new();
        for dir in Direction::ALL {
            let run = self.bracketed_run(sq, player, dir);
            flips.extend(sq.ray(dir).take(run));
        }
        flips
    }

    /// Place a disc and flip every bracketed run, returning the new position.
    ///
    /// `self` is left untouched.
    pub fn try_apply_move(&self, sq: Square, player: Player) -> Result<Board, MoveError> {
        let Square(row, col) = sq;
        if row >= 8 || col >= 8 {
            return Err(MoveError::OutOfBounds {
                row: row as i32,
                col: col as i32,
            });
        }
        if !self.cell(sq).is_empty() {
            return Err(MoveError::Occupied { row, col });
        }

        let flips = self.flips_for(sq, player);
        if flips.is_empty() {
            return Err(MoveError::NoFlips { row, col });
        }

        let mut next = *self;
        next.put(sq, player.disc());
        for flip in flips {
            next.put(flip, player.disc());
        }
        Ok(next)
    }

    /// Fail-fast variant of [`Board::try_apply_move`].
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal for `player`. Callers must check
    /// [`Board::is_legal_move`] first.
    #[must_use]
    pub fn apply_move(&self, sq: Square, player: Player) -> Board {
        match self.try_apply_move(sq, player) {
            Ok(board) => board,
            Err(e) => panic!("{e}"),
        }
    }

    /// True when neither side has a legal move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// `None` while either side can still move, otherwise the disc-count result.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        let black = self.count(Player::Black);
        let white = self.count(Player::White);
        Some(match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
            std::cmp::Ordering::Less => Outcome::Win(Player::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// Whether a cell holds one of `player`'s discs.
    #[inline]
    pub(crate) fn owns(&self, sq: Square, player: Player) -> bool {
        self.cell(sq) == Cell::from(player)
    }
}
