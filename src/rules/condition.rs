//! Win conditions and their priority order.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// One of the four independent ways a game can end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WinCondition {
    /// A side's stones split into several disconnected groups; the other side wins.
    Isolation,
    /// One side alone holds a strict majority of the cells around the void.
    TerritoryControl,
    /// The reference side surrounds an enemy stone on all six sides.
    Encirclement,
    /// A single connected group touches all six board edges.
    NetworkCompletion,
}

impl WinCondition {
    /// Evaluation order, highest priority first.
    ///
    /// When several conditions hold at once, the earliest one decides.
    pub const PRIORITY: [WinCondition; 4] = [
        WinCondition::Isolation,
        WinCondition::TerritoryControl,
        WinCondition::Encirclement,
        WinCondition::NetworkCompletion,
    ];

    /// Short lowercase name, used in logs and bindings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            WinCondition::Isolation => "isolation",
            WinCondition::TerritoryControl => "territory_control",
            WinCondition::Encirclement => "encirclement",
            WinCondition::NetworkCompletion => "network_completion",
        }
    }
}

impl std::fmt::Display for WinCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A decided game: who won and which condition fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub winner: Side,
    pub condition: WinCondition,
}

impl Victory {
    #[must_use]
    pub const fn new(winner: Side, condition: WinCondition) -> Self {
        Self { winner, condition }
    }
}
