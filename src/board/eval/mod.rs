//! Static position evaluation.
//!
//! Combines five terms, each weighted by the active [`EvalProfile`]:
//! - positional square weights
//! - mobility ratio
//! - corner control
//! - edge stability (precomputed table over all edge configurations)
//! - internal stability (flood fill from occupied corners)
//!
//! The mobility and stability terms are computed independently for each
//! perspective, so `evaluate(b, Black)` is generally not exactly
//! `-evaluate(b, White)`.

pub mod edge_table;
mod profile;
pub mod stability;
pub mod tables;
mod terms;

pub use edge_table::{EdgeConfig, EdgeStabilityTable};
pub use profile::EvalProfile;
pub use stability::{stable_discs, StableDiscs};

use super::{Board, Player};

/// Weighted combination of the evaluation terms.
///
/// Holds no mutable state; one evaluator can score any number of boards.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'t> {
    profile: EvalProfile,
    table: &'t EdgeStabilityTable,
}

impl Evaluator<'static> {
    /// Evaluator over the process-wide edge table.
    #[must_use]
    pub fn new(profile: EvalProfile) -> Self {
        Evaluator {
            profile,
            table: EdgeStabilityTable::global(),
        }
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Evaluator::new(EvalProfile::default())
    }
}

impl<'t> Evaluator<'t> {
    /// Evaluator over a caller-owned edge table.
    #[must_use]
    pub fn with_table(profile: EvalProfile, table: &'t EdgeStabilityTable) -> Self {
        Evaluator { profile, table }
    }

    #[must_use]
    pub fn profile(&self) -> EvalProfile {
        self.profile
    }

    /// Score `board` from `player`'s point of view. Higher is better for `player`.
    #[must_use]
    pub fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let p = &self.profile;
        let mut total = 0.0f32;

        if p.positional != 0.0 {
            total += board.positional_score(player) as f32 * p.positional;
        }
        if p.mobility != 0.0 {
            total += board.mobility_ratio(player) * p.mobility;
        }
        if p.edge_stability != 0.0 {
            total += board.edge_stability(player, self.table) as f32 * p.edge_stability;
        }
        if p.internal_stability != 0.0 {
            total += board.internal_stability(player) as f32 * p.internal_stability;
        }
        if p.corner != 0.0 {
            total += board.corner_control(player) as f32 * p.corner;
        }

        total as i32
    }
}

/// Evaluate with the default profile.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    Evaluator::default().evaluate(board, player)
}
