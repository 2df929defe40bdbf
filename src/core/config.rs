//! Board configuration.
//!
//! A `GridConfig` fully determines a board's topology: two grids built from
//! equal configs are identical.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Board radius used by the standard game.
pub const DEFAULT_RADIUS: i32 = 3;

/// The standard void is the single centre cell.
pub const DEFAULT_VOID_RADIUS: i32 = 1;

/// Largest accepted board radius. Keeps cell coordinates and edge corners
/// well inside `i32`.
pub const MAX_RADIUS: i32 = 1024;

/// Shape of the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridConfig {
    /// Largest distance from the centre of a playable cell.
    pub radius: i32,

    /// Cells closer than this to the centre form the void.
    /// Cells at exactly this distance border it.
    pub void_radius: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            void_radius: DEFAULT_VOID_RADIUS,
        }
    }
}

impl GridConfig {
    /// Set the board radius.
    pub fn with_radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the void radius.
    pub fn with_void_radius(mut self, void_radius: i32) -> Self {
        self.void_radius = void_radius;
        self
    }

    /// Check that the board is non-empty and the void fits inside it.
    pub fn validate(&self) -> Result<()> {
        if self.radius < 1 {
            return Err(GridError::InvalidBoardSize(self.radius));
        }
        if self.radius > MAX_RADIUS {
            return Err(GridError::BoardTooLarge {
                radius: self.radius,
                max: MAX_RADIUS,
            });
        }
        if self.void_radius < 1 || self.void_radius > self.radius {
            return Err(GridError::InvalidVoidRadius {
                void_radius: self.void_radius,
                radius: self.radius,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.radius, 3);
        assert_eq!(config.void_radius, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GridConfig::default().with_radius(5).with_void_radius(2);
        assert_eq!(config.radius, 5);
        assert_eq!(config.void_radius, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_board() {
        for radius in [0, -1, i32::MIN] {
            let config = GridConfig::default().with_radius(radius);
            assert_eq!(config.validate(), Err(GridError::InvalidBoardSize(radius)));
        }
    }

    #[test]
    fn test_validate_rejects_huge_board() {
        assert!(GridConfig::default().with_radius(MAX_RADIUS).validate().is_ok());
        for radius in [MAX_RADIUS + 1, i32::MAX] {
            let config = GridConfig::default().with_radius(radius);
            assert_eq!(
                config.validate(),
                Err(GridError::BoardTooLarge { radius, max: MAX_RADIUS })
            );
        }
    }

    #[test]
    fn test_validate_rejects_bad_void() {
        let too_big = GridConfig::default().with_void_radius(4);
        assert_eq!(
            too_big.validate(),
            Err(GridError::InvalidVoidRadius { void_radius: 4, radius: 3 })
        );

        let empty = GridConfig::default().with_void_radius(0);
        assert!(matches!(empty.validate(), Err(GridError::InvalidVoidRadius { .. })));

        let whole_board = GridConfig::default().with_radius(2).with_void_radius(2);
        assert!(whole_board.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GridConfig::default().with_radius(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
