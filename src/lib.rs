//! # hex-void
//!
//! Rules adjudication for a two-sided stone-placement game on a hexagonal
//! board with a central void.
//!
//! ## Design Principles
//!
//! 1. **Topology Once**: Board cells, edges, and the void are derived from the
//!    radius a single time and shared read-only by every check.
//!
//! 2. **Stateless Checks**: `WinDetector` keeps nothing between calls. The
//!    caller passes a complete stone snapshot every time.
//!
//! 3. **Deterministic Priority**: When several win conditions hold at once,
//!    a fixed priority order picks exactly one answer.
//!
//! ## Example
//!
//! ```
//! use hex_void::{HexGrid, Side, Stone, WinDetector};
//!
//! let grid = HexGrid::new(3)?;
//! let detector = WinDetector::new(&grid);
//!
//! let stones = vec![
//!     Stone::at(Side::White, 0, 0),
//!     Stone::at(Side::White, 1, 0),
//! ];
//! assert_eq!(detector.check_winner(&stones, Side::White), None);
//! # Ok::<(), hex_void::GridError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Hex coordinates, sides, stones, configuration
//! - `grid`: Board topology
//! - `rules`: Win conditions and the detector
//! - `error`: Construction errors

pub mod core;
pub mod error;
pub mod grid;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Direction, GridConfig, Hex, Side, SideMap, Stone};
pub use crate::error::{GridError, Result};
pub use crate::grid::HexGrid;
pub use crate::rules::{Position, Victory, WinCondition, WinDetector};
