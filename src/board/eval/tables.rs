//! Evaluation constants and tables.

// ============================================================================
// POSITIONAL WEIGHTS
// ============================================================================

/// Static square weights, indexed `[row][col]`. Corners dominate; the squares
/// touching a corner are penalised until that corner is taken.
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

// ============================================================================
// EDGE DISC WEIGHTS
// ============================================================================
// Per-cell weights used for the static score of an edge line. Positions are
// indices along the 8-cell edge: 0/7 corners, 1/6 next to a corner,
// 2/5 one further in, 3/4 the middle pair.

/// Any disc on a corner
pub const EDGE_CORNER_WEIGHT: i32 = 700;

/// `[stable, semi-stable, unstable]` weights for edge indices 1 and 6
pub const EDGE_C_WEIGHTS: [i32; 3] = [1200, 200, -25];

/// `[stable, semi-stable, unstable]` weights for edge indices 2 and 5
pub const EDGE_A_WEIGHTS: [i32; 3] = [1000, 200, 75];

/// `[stable, semi-stable, unstable]` weights for edge indices 3 and 4
pub const EDGE_B_WEIGHTS: [i32; 3] = [1000, 200, 50];
