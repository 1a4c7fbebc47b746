//! Internal (whole-board) disc stability.
//!
//! Stability spreads outward from occupied corners. A disc next to a stable
//! disc of its own colour becomes stable when, in each of the eight
//! directions, its line reaches the board edge or a stable disc of its colour
//! over an unbroken run of its own colour. Labels are never removed, and a
//! final rescan picks up discs whose anchors were labelled after their
//! neighbours were dequeued, so the result does not depend on queue order.

use std::collections::VecDeque;

use crate::board::{Board, Cell, Direction, Player, Square};

/// Set of discs proven unflippable on a fixed board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StableDiscs(u64);

impl StableDiscs {
    #[inline]
    #[must_use]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.as_index()) != 0
    }

    #[inline]
    fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.as_index();
    }

    #[must_use]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every disc in `self` is also in `other`.
    #[must_use]
    pub fn is_subset(self, other: StableDiscs) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Square> {
        Square::all().filter(move |&sq| self.contains(sq))
    }
}

/// Walk from `sq` in `dir` over discs of `color`; true if the walk leaves the
/// board or meets an already-stable disc of `color` before anything else.
fn anchored(board: &Board, stable: StableDiscs, sq: Square, color: Cell, dir: Direction) -> bool {
    for next in sq.ray(dir) {
        if board.cell(next) != color {
            return false;
        }
        if stable.contains(next) {
            return true;
        }
    }
    true
}

fn anchored_on_all_lines(board: &Board, stable: StableDiscs, sq: Square, color: Cell) -> bool {
    Direction::ALL
        .iter()
        .all(|&dir| anchored(board, stable, sq, color, dir))
}

/// Flood-fill the stable set from the occupied corners.
#[must_use]
pub fn stable_discs(board: &Board) -> StableDiscs {
    let mut stable = StableDiscs::default();
    let mut queue = VecDeque::with_capacity(64);

    for corner in Square::CORNERS {
        if !board.cell(corner).is_empty() {
            stable.insert(corner);
            queue.push_back(corner);
        }
    }

    loop {
        while let Some(sq) = queue.pop_front() {
            let color = board.cell(sq);
            for dir in Direction::ALL {
                let Some(next) = sq.step(dir) else { continue };
                if board.cell(next) != color || stable.contains(next) {
                    continue;
                }
                if anchored_on_all_lines(board, stable, next, color) {
                    stable.insert(next);
                    queue.push_back(next);
                }
            }
        }

        // Rescan candidates bordering the stable set; stop once nothing new qualifies.
        for sq in Square::all() {
            let color = board.cell(sq);
            if color.is_empty() || stable.contains(sq) {
                continue;
            }
            let touches_stable = Direction::ALL.iter().any(|&dir| {
                sq.step(dir)
                    .is_some_and(|n| stable.contains(n) && board.cell(n) == color)
            });
            if touches_stable && anchored_on_all_lines(board, stable, sq, color) {
                stable.insert(sq);
                queue.push_back(sq);
            }
        }
        if queue.is_empty() {
            break;
        }
    }

    stable
}

/// Stable Black discs minus stable White discs.
#[must_use]
pub fn stability_difference(board: &Board) -> i32 {
    let stable = stable_discs(board);
    stable.iter().fold(0, |acc, sq| match board.cell(sq).player() {
        Some(Player::Black) => acc + 1,
        Some(Player::White) => acc - 1,
        None => acc,
    })
}
