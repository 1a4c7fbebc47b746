//! Edge stability table tests.

use crate::board::eval::edge_table::{
    classify, decode, disc_weight, encode, invert, static_value, EdgeClass, EdgeConfig,
    EdgeStabilityTable, EDGE_CONFIGURATIONS,
};
use crate::board::{Cell, Player};

const E: Cell = Cell::Empty;
const B: Cell = Cell::Black;
const W: Cell = Cell::White;

#[test]
fn test_encoding_is_most_significant_first() {
    assert_eq!(encode(&[E; 8]), 0);
    assert_eq!(encode(&[B, E, E, E, E, E, E, E]), 2187);
    assert_eq!(encode(&[E, E, E, E, E, E, E, W]), 2);
    assert_eq!(encode(&[W; 8]), EDGE_CONFIGURATIONS - 1);
}

#[test]
fn test_decode_inverts_encode() {
    for index in [0, 1, 2, 3, 100, 2187, 4000, 6560] {
        assert_eq!(encode(&decode(index)), index);
    }
}

#[test]
fn test_invert_swaps_colours() {
    let config: EdgeConfig = [B, W, E, B, E, W, W, E];
    assert_eq!(invert(&config), [W, B, E, W, E, B, B, E]);
    assert_eq!(invert(&invert(&config)), config);
}

#[test]
fn test_classification() {
    let config: EdgeConfig = [B, B, B, E, E, W, E, E];
    assert_eq!(classify(&config, 0), EdgeClass::Stable);
    assert_eq!(classify(&config, 2), EdgeClass::Stable);
    assert_eq!(classify(&config, 5), EdgeClass::Unstable);

    let config: EdgeConfig = [E, B, B, E, E, E, E, E];
    assert_eq!(classify(&config, 1), EdgeClass::SemiStable);
    assert_eq!(classify(&config, 2), EdgeClass::SemiStable);

    let config: EdgeConfig = [E, E, E, E, W, W, W, W];
    assert_eq!(classify(&config, 4), EdgeClass::Stable);
}

#[test]
fn test_static_values() {
    assert_eq!(static_value(&[E; 8]), 0);
    assert_eq!(static_value(&[B, E, E, E, E, E, E, E]), 700);
    assert_eq!(static_value(&[E, E, E, E, E, E, E, W]), -700);
    assert_eq!(static_value(&[E, B, E, E, E, E, E, E]), -25);
    assert_eq!(static_value(&[B, B, B, E, E, E, E, E]), 700 + 1200 + 1000);
    assert_eq!(static_value(&[E, E, E, B, E, E, E, E]), 50);
    assert_eq!(static_value(&[E, E, W, E, E, E, E, E]), -75);
}

#[test]
fn test_corner_weight_is_fixed() {
    for index in 0..EDGE_CONFIGURATIONS {
        let config = decode(index);
        for corner in [0, 7] {
            if !config[corner].is_empty() {
                assert_eq!(disc_weight(&config, corner), 700, "config {config:?}");
            }
        }
    }
}

#[test]
fn test_table_shape() {
    let table = EdgeStabilityTable::global();
    assert_eq!(table.len(), EDGE_CONFIGURATIONS);
    assert!(!table.is_empty());
    assert!(table.passes() >= 2);
    assert_eq!(table.get(EDGE_CONFIGURATIONS), None);
}

#[test]
fn test_empty_edge_is_zero() {
    let table = EdgeStabilityTable::global();
    assert_eq!(table.value(&[E; 8], Player::Black), 0);
    assert_eq!(table.value(&[E; 8], Player::White), 0);
}

#[test]
fn test_rebuild_is_identical() {
    let first = EdgeStabilityTable::build();
    let second = EdgeStabilityTable::build();
    assert_eq!(first, second);
    assert_eq!(&first, EdgeStabilityTable::global());
}

#[test]
fn test_relaxation_never_lowers_values() {
    let table = EdgeStabilityTable::global();
    for index in 0..EDGE_CONFIGURATIONS {
        let relaxed = table.get(index).unwrap_or(i32::MIN);
        assert!(relaxed >= static_value(&decode(index)), "index {index}");
    }
}

#[test]
fn test_relaxation_reaches_corner_capture() {
    // Black can take the corner next to the lone White disc.
    let table = EdgeStabilityTable::global();
    let config: EdgeConfig = [E, W, E, E, E, E, E, E];
    assert_eq!(static_value(&config), 25);
    assert!(table.value(&config, Player::Black) >= 725);
}

#[test]
fn test_lone_corner_is_not_relaxed() {
    let table = EdgeStabilityTable::global();
    assert_eq!(table.value(&[B, E, E, E, E, E, E, E], Player::Black), 700);
}

#[test]
fn test_white_lookup_uses_inverted_config() {
    let table = EdgeStabilityTable::global();
    for index in (0..EDGE_CONFIGURATIONS).step_by(37) {
        let config = decode(index);
        assert_eq!(
            table.value(&config, Player::White),
            -table.value(&invert(&config), Player::Black)
        );
    }
}
