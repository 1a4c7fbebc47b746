//! Edge stability table.
//!
//! Every 8-cell border line has 3^8 = 6561 possible contents. Each one gets a
//! static score from per-disc weights (see [`tables`](super::tables)), then the
//! whole table is relaxed to a fixed point: a configuration is worth at least
//! as much as the best configuration Black can reach from it by one placement
//! next to a White disc. Values only ever rise and are bounded by the best
//! static score, so the relaxation terminates.
//!
//! The table is built from Black's point of view. White lookups invert the
//! colours and negate the result.

use std::time::Instant;

use log::debug;
use once_cell::sync::Lazy;

use super::tables::{EDGE_A_WEIGHTS, EDGE_B_WEIGHTS, EDGE_CORNER_WEIGHT, EDGE_C_WEIGHTS};
use crate::board::{Cell, Player};

/// Cells along one board edge
pub const EDGE_LENGTH: usize = 8;

/// Number of distinct edge configurations (3^8)
pub const EDGE_CONFIGURATIONS: usize = 6561;

/// One border line read in increasing index order.
pub type EdgeConfig = [Cell; EDGE_LENGTH];

static GLOBAL_TABLE: Lazy<EdgeStabilityTable> = Lazy::new(EdgeStabilityTable::build);

/// Stability class of a single edge disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    /// Corner, or an unbroken same-colour run to the nearer corner
    Stable,
    /// Not stable, but an immediate neighbour shares its colour
    SemiStable,
    Unstable,
}

impl EdgeClass {
    const fn weight_index(self) -> usize {
        match self {
            EdgeClass::Stable => 0,
            EdgeClass::SemiStable => 1,
            EdgeClass::Unstable => 2,
        }
    }
}

/// Immutable lookup from edge configuration to stability score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeStabilityTable {
    values: Vec<i32>,
    passes: u32,
}

impl EdgeStabilityTable {
    /// The process-wide table, built on first use.
    #[must_use]
    pub fn global() -> &'static EdgeStabilityTable {
        &GLOBAL_TABLE
    }

    /// Build the table from scratch.
    #[must_use]
    pub fn build() -> Self {
        let start = Instant::now();
        let mut values: Vec<i32> = (0..EDGE_CONFIGURATIONS)
            .map(|index| static_value(&decode(index)))
            .collect();

        let mut passes = 0;
        loop {
            passes += 1;
            let mut changed = false;

            for index in 0..EDGE_CONFIGURATIONS {
                let config = decode(index);
                if disc_count(&config) == 0 {
                    continue;
                }

                let mut best = values[index];
                for pos in black_placements(&config) {
                    let mut next = config;
                    next[pos] = Cell::Black;
                    let value = values[encode(&next)];
                    if value > best {
                        best = value;
                        changed = true;
                    }
                }
                values[index] = best;
            }

            if !changed {
                break;
            }
        }

        debug!(
            "edge stability table built: {} entries, {} passes, {:?}",
            values.len(),
            passes,
            start.elapsed()
        );

        EdgeStabilityTable { values, passes }
    }

    /// Score of `config` from `perspective`'s point of view.
    #[must_use]
    pub fn value(&self, config: &EdgeConfig, perspective: Player) -> i32 {
        match perspective {
            Player::Black => self.values[encode(config)],
            Player::White => -self.values[encode(&invert(config))],
        }
    }

    /// Raw (Black-perspective) entry by encoded index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Relaxation sweeps it took to reach the fixed point (the last one changes nothing).
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Base-3 index, most significant digit first.
#[must_use]
pub fn encode(config: &EdgeConfig) -> usize {
    config
        .iter()
        .fold(0, |index, cell| index * 3 + cell.digit() as usize)
}

/// Inverse of [`encode`]. Indices past the table wrap modulo 3^8.
#[must_use]
pub fn decode(mut index: usize) -> EdgeConfig {
    let mut config = [Cell::Empty; EDGE_LENGTH];
    for cell in config.iter_mut().rev() {
        *cell = Cell::from_digit((index % 3) as u8).unwrap_or(Cell::Empty);
        index /= 3;
    }
    config
}

/// Swap Black and White along the line.
#[must_use]
pub fn invert(config: &EdgeConfig) -> EdgeConfig {
    config.map(Cell::inverted)
}

fn disc_count(config: &EdgeConfig) -> usize {
    config.iter().filter(|c| !c.is_empty()).count()
}

/// Empty cells next to a White disc: Black placements in the 1-D model.
fn black_placements(config: &EdgeConfig) -> impl Iterator<Item = usize> + '_ {
    (0..EDGE_LENGTH).filter(move |&i| {
        config[i].is_empty()
            && ((i > 0 && config[i - 1] == Cell::White)
                || (i + 1 < EDGE_LENGTH && config[i + 1] == Cell::White))
    })
}

const fn is_corner(i: usize) -> bool {
    i == 0 || i == EDGE_LENGTH - 1
}

/// Classify the disc at `i` (must be non-empty).
#[must_use]
pub fn classify(config: &EdgeConfig, i: usize) -> EdgeClass {
    let disc = config[i];
    if is_corner(i) {
        return EdgeClass::Stable;
    }

    let to_corner = if i < EDGE_LENGTH / 2 {
        &config[..=i]
    } else {
        &config[i..]
    };
    if to_corner.iter().all(|&c| c == disc) {
        return EdgeClass::Stable;
    }

    let left = i > 0 && config[i - 1] == disc;
    let right = i + 1 < EDGE_LENGTH && config[i + 1] == disc;
    if left || right {
        EdgeClass::SemiStable
    } else {
        EdgeClass::Unstable
    }
}

pub(crate) fn disc_weight(config: &EdgeConfig, i: usize) -> i32 {
    if is_corner(i) {
        return EDGE_CORNER_WEIGHT;
    }
    let class = classify(config, i).weight_index();
    match i {
        1 | 6 => EDGE_C_WEIGHTS[class],
        2 | 5 => EDGE_A_WEIGHTS[class],
        _ => EDGE_B_WEIGHTS[class],
    }
}

/// Unrelaxed score: Black discs add their weight, White discs subtract it.
#[must_use]
pub fn static_value(config: &EdgeConfig) -> i32 {
    config
        .iter()
        .enumerate()
        .map(|(i, &cell)| match cell {
            Cell::Empty => 0,
            Cell::Black => disc_weight(config, i),
            Cell::White => -disc_weight(config, i),
        })
        .sum()
}
