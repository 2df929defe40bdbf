//! Core value types: coordinates, sides, stones, configuration.
//!
//! Everything here is a small `Copy` or plain-data type with value equality,
//! usable as a hash key in graph algorithms.

pub mod hex;
pub mod side;
pub mod stone;
pub mod config;

pub use hex::{Direction, Hex};
pub use side::{Side, SideMap};
pub use stone::Stone;
pub use config::{GridConfig, DEFAULT_RADIUS, DEFAULT_VOID_RADIUS, MAX_RADIUS};
