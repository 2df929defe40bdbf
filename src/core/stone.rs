//! Placed stones.

use serde::{Deserialize, Serialize};

use super::{Hex, Side};

/// A marker placed by `side` on `hex`.
///
/// A board position is a set of stones with at most one stone per cell.
/// That uniqueness is a caller precondition; nothing here enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub side: Side,
    pub hex: Hex,
}

impl Stone {
    #[must_use]
    pub const fn new(side: Side, hex: Hex) -> Self {
        Self { side, hex }
    }

    /// Shorthand for `Stone::new(side, Hex::new(q, r))`.
    #[must_use]
    pub const fn at(side: Side, q: i32, r: i32) -> Self {
        Self::new(side, Hex::new(q, r))
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.side, self.hex)
    }
}
