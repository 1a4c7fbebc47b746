//! Named evaluation weight sets.
//!
//! Observed useful ranges: positional x0-1, mobility x2-1000, corner x10-50,
//! internal stability x1-5, edge stability x1-10. A zero weight switches the
//! term off entirely (it is not computed).

use std::fmt;
use std::str::FromStr;

use crate::board::error::ProfileError;

/// Weights applied to each evaluation term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalProfile {
    pub name: &'static str,
    pub positional: f32,
    pub mobility: f32,
    pub edge_stability: f32,
    pub internal_stability: f32,
    pub corner: f32,
}

impl EvalProfile {
    /// General-purpose weights; the default.
    pub const BALANCED: EvalProfile = EvalProfile {
        name: "balanced",
        positional: 1.0,
        mobility: 5.0,
        edge_stability: 2.0,
        internal_stability: 1.0,
        corner: 25.0,
    };

    /// Mobility-dominated weights with the positional table switched off.
    pub const MOBILITY: EvalProfile = EvalProfile {
        name: "mobility",
        positional: 0.0,
        mobility: 1000.0,
        edge_stability: 2.0,
        internal_stability: 1.0,
        corner: 0.0,
    };

    /// Heavy corner and stability emphasis.
    pub const CORNERS: EvalProfile = EvalProfile {
        name: "corners",
        positional: 1.0,
        mobility: 2.0,
        edge_stability: 1.0,
        internal_stability: 5.0,
        corner: 50.0,
    };

    /// Square table plus corners only; cheapest to compute.
    pub const POSITIONAL: EvalProfile = EvalProfile {
        name: "positional",
        positional: 1.0,
        mobility: 0.0,
        edge_stability: 0.0,
        internal_stability: 0.0,
        corner: 10.0,
    };

    /// All built-in profiles
    pub const BUILTIN: [EvalProfile; 4] = [
        EvalProfile::BALANCED,
        EvalProfile::MOBILITY,
        EvalProfile::CORNERS,
        EvalProfile::POSITIONAL,
    ];
}

impl Default for EvalProfile {
    fn default() -> Self {
        EvalProfile::BALANCED
    }
}

impl fmt::Display for EvalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (positional {}, mobility {}, edge {}, internal {}, corner {})",
            self.name,
            self.positional,
            self.mobility,
            self.edge_stability,
            self.internal_stability,
            self.corner
        )
    }
}

impl FromStr for EvalProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        EvalProfile::BUILTIN
            .into_iter()
            .find(|p| p.name == normalized)
            .ok_or_else(|| ProfileError::Unknown {
                name: s.to_string(),
            })
    }
}
