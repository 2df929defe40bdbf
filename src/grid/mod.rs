//! Board topology.
//!
//! A [`HexGrid`] is built once per board size and shared read-only by every
//! win check. It is `Send + Sync` and never mutated after construction.

mod topology;

pub use topology::{HexGrid, ALL_EDGES, EDGE_COUNT};
