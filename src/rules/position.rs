//! Per-call occupancy index over a stone snapshot.
//!
//! `Position` turns the caller's set of stones into a hex -> side map plus
//! per-side sorted stone lists, so each win condition can run neighbour
//! lookups in O(1) without touching the caller's collection again.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Hex, Side, SideMap, Stone};

/// Occupancy snapshot of the board.
///
/// ## Preconditions
///
/// Each hex holds at most one stone. If a snapshot violates this, the last
/// stone seen for a hex determines its side; the result of any win check on
/// such a snapshot is unspecified.
#[derive(Clone, Debug, Default)]
pub struct Position {
    occupancy: FxHashMap<Hex, Side>,

    /// Sorted by `(q, r)`.
    stones: SideMap<Vec<Hex>>,
}

impl Position {
    /// Index a stone snapshot.
    pub fn from_stones<'a, I>(stones: I) -> Self
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        let occupancy: FxHashMap<Hex, Side> =
            stones.into_iter().map(|stone| (stone.hex, stone.side)).collect();

        let mut by_side: SideMap<Vec<Hex>> = SideMap::default();
        for (hex, side) in &occupancy {
            by_side[*side].push(*hex);
        }
        for side in Side::ALL {
            by_side[side].sort_unstable();
        }

        Self {
            occupancy,
            stones: by_side,
        }
    }

    /// The side occupying `hex`, if any.
    #[must_use]
    pub fn side_at(&self, hex: Hex) -> Option<Side> {
        self.occupancy.get(&hex).copied()
    }

    #[must_use]
    pub fn is_occupied_by(&self, hex: Hex, side: Side) -> bool {
        self.side_at(hex) == Some(side)
    }

    /// Cells held by `side`, sorted by `(q, r)`.
    #[must_use]
    pub fn stones_of(&self, side: Side) -> &[Hex] {
        &self.stones[side]
    }

    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.stones[side].len()
    }

    /// Total number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// Maximal connected groups of `side`'s stones.
    ///
    /// Two stones share a group iff a chain of same-side stones links them,
    /// each step being one of the six unit offsets. Groups are discovered in
    /// `(q, r)` order of their smallest stone, and each group lists its
    /// stones in breadth-first order.
    pub fn groups(&self, side: Side) -> Vec<Vec<Hex>> {
        let mut visited: FxHashSet<Hex> = FxHashSet::default();
        let mut groups = Vec::new();

        for &start in self.stones_of(side) {
            if !visited.insert(start) {
                continue;
            }

            let mut group = Vec::new();
            let mut queue = VecDeque::from([start]);
            while let Some(hex) = queue.pop_front() {
                group.push(hex);
                for neighbor in hex.neighbors() {
                    if self.is_occupied_by(neighbor, side) && visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
            groups.push(group);
        }

        groups
    }
}
