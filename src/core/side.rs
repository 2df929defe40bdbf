//! The two competing sides and per-side data storage.
//!
//! ## Side
//!
//! Exhaustive two-value enum. "No winner" is always `Option::<Side>::None`,
//! never a third variant.
//!
//! ## SideMap
//!
//! Fixed-size per-side storage with O(1) access, indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    White,
    Red,
}

impl Side {
    /// Both sides, in the order side-agnostic checks scan them.
    pub const ALL: [Side; 2] = [Side::White, Side::Red];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Red,
            Side::Red => Side::White,
        }
    }

    /// Get the raw side index (0 for White, 1 for Red).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Red => write!(f, "Red"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use hex_void::core::{Side, SideMap};
///
/// let mut counts: SideMap<usize> = SideMap::default();
/// counts[Side::Red] += 2;
///
/// assert_eq!(counts[Side::White], 0);
/// assert_eq!(counts[Side::Red], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::White), factory(Side::Red)],
        }
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in `Side::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::White.opponent(), Side::Red);
        assert_eq!(Side::Red.opponent(), Side::White);
        for side in Side::ALL {
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::White), "White");
        assert_eq!(format!("{}", Side::Red), "Red");
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::White], 0);
        assert_eq!(map[Side::Red], 10);
    }

    #[test]
    fn test_side_map_iter_order() {
        let map = SideMap::new(|s| s);
        let pairs: Vec<_> = map.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(pairs, vec![(Side::White, Side::White), (Side::Red, Side::Red)]);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<Vec<u8>> = SideMap::default();
        map[Side::White].push(1);
        map.get_mut(Side::Red).push(2);
        assert_eq!(map[Side::White], vec![1]);
        assert_eq!(map[Side::Red], vec![2]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Side::Red).unwrap();
        let deserialized: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Side::Red);
    }
}
