//! Individual evaluation terms.
//!
//! Each term is scored from `player`'s side: positive is good for `player`.

use super::edge_table::EdgeStabilityTable;
use super::stability::stability_difference;
use super::tables::POSITION_WEIGHTS;
use crate::board::{Board, Player, Square};

impl Board {
    /// Sum of square weights under `player`'s discs minus the opponent's.
    #[must_use]
    pub fn positional_score(&self, player: Player) -> i32 {
        let opponent = player.opponent();
        let mut score = 0;
        for sq in Square::all() {
            let weight = POSITION_WEIGHTS[sq.row()][sq.col()];
            if self.owns(sq, player) {
                score += weight;
            } else if self.owns(sq, opponent) {
                score -= weight;
            }
        }
        score
    }

    /// `(own - opp) / (own + opp + 2)` over legal-move counts; always in (-1, 1).
    #[must_use]
    pub fn mobility_ratio(&self, player: Player) -> f32 {
        let own = self.mobility(player) as f32;
        let opp = self.mobility(player.opponent()) as f32;
        (own - opp) / (own + opp + 2.0)
    }

    /// Corners held by `player` minus corners held by the opponent.
    #[must_use]
    pub fn corner_control(&self, player: Player) -> i32 {
        let opponent = player.opponent();
        Square::CORNERS.iter().fold(0, |acc, &sq| {
            if self.owns(sq, player) {
                acc + 1
            } else if self.owns(sq, opponent) {
                acc - 1
            } else {
                acc
            }
        })
    }

    /// Edge table values of all four border lines from `player`'s side.
    #[must_use]
    pub fn edge_stability(&self, player: Player, table: &EdgeStabilityTable) -> i32 {
        self.edges()
            .iter()
            .map(|edge| table.value(edge, player))
            .sum()
    }

    /// Stable-disc differential from `player`'s side.
    #[must_use]
    pub fn internal_stability(&self, player: Player) -> i32 {
        match player {
            Player::Black => stability_difference(self),
            Player::White => -stability_difference(self),
        }
    }
}
