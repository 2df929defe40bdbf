//! Error types for board construction.
//!
//! Win detection itself cannot fail once its input preconditions hold, so the
//! only fallible operations are building a [`HexGrid`](crate::grid::HexGrid)
//! and validating a [`GridConfig`](crate::core::GridConfig).

use thiserror::Error;

/// Errors raised while building board topology.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The board radius must be at least 1.
    #[error("invalid board size: radius {0} (must be >= 1)")]
    InvalidBoardSize(i32),

    /// The board radius exceeds [`MAX_RADIUS`](crate::core::MAX_RADIUS).
    #[error("board too large: radius {radius} (must be <= {max})")]
    BoardTooLarge { radius: i32, max: i32 },

    /// The void must be non-empty and fit inside the board.
    #[error("invalid void radius {void_radius} for board radius {radius} (must be 1..={radius})")]
    InvalidVoidRadius { void_radius: i32, radius: i32 },
}

pub type Result<T> = std::result::Result<T, GridError>;
