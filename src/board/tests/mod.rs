//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legality, flipping and terminal detection
//! - `edge_table.rs` - Edge stability table construction and lookup
//! - `stability.rs` - Internal stability flood fill
//! - `eval.rs` - Evaluation terms and profiles
//! - `search.rs` - Alpha-beta search behaviour
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_table;
mod proptest;
