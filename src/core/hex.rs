//! Axial hex coordinates.
//!
//! Cells are addressed with axial coordinates `(q, r)`. The third cube
//! coordinate is derived as `s = -q - r` and never stored.
//!
//! ## Adjacency
//!
//! Two cells are neighbours iff they differ by one of the six unit offsets
//! in [`Direction::ALL`]:
//!
//! ```
//! use hex_void::core::{Direction, Hex};
//!
//! let origin = Hex::origin();
//! let neighbors: Vec<_> = origin.neighbors().collect();
//!
//! assert_eq!(neighbors.len(), 6);
//! assert_eq!(neighbors[0], Hex::new(1, 0));
//! assert!(neighbors.iter().all(|n| n.distance(origin) == 1));
//! assert_eq!(origin.neighbor(Direction::SouthEast), Some(Hex::new(0, 1)));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// One of the six unit steps on the axial lattice.
///
/// Variants are listed in rotational order; `ALL[i + 1]` is `ALL[i]`
/// rotated by 60 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// `(+1, 0)`
    East,
    /// `(+1, -1)`
    NorthEast,
    /// `(0, -1)`
    NorthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, +1)`
    SouthWest,
    /// `(0, +1)`
    SouthEast,
}

impl Direction {
    /// All six directions in rotational order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// The `(dq, dr)` unit offset for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (0, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::SouthEast => (0, 1),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotate counter-clockwise by `steps` sixths of a turn.
    #[must_use]
    pub const fn rotate(self, steps: usize) -> Direction {
        Direction::ALL[(self as usize + steps) % 6]
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        self.rotate(3)
    }
}

/// A cell on the infinite axial hex lattice.
///
/// Ordering is lexicographic on `(q, r)`; the grid relies on it for stable
/// iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The centre of the board.
    #[must_use]
    pub const fn origin() -> Self {
        Self { q: 0, r: 0 }
    }

    /// Derived cube coordinate.
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Distance from the origin in steps.
    #[must_use]
    pub fn length(self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s().abs())
    }

    /// Number of single steps between two cells.
    #[must_use]
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// Multiply both components by `k`.
    #[must_use]
    pub const fn scale(self, k: i32) -> Self {
        Self::new(self.q * k, self.r * k)
    }

    /// The adjacent cell in `direction`, or `None` if it falls outside the
    /// `i32` lattice.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Hex> {
        let (dq, dr) = direction.offset();
        Some(Hex::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// The adjacent cells, in [`Direction::ALL`] order.
    ///
    /// Always six except at the rim of the `i32` range. Not filtered by any
    /// board; see [`HexGrid::board_neighbors`](crate::grid::HexGrid::board_neighbors).
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        Direction::ALL.into_iter().filter_map(move |d| self.neighbor(d))
    }

    #[must_use]
    pub fn is_adjacent(self, other: Hex) -> bool {
        self.distance(other) == 1
    }
}

impl From<Direction> for Hex {
    fn from(direction: Direction) -> Self {
        let (q, r) = direction.offset();
        Hex::new(q, r)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Hex::new(q, r)
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_offsets() {
        let offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(
            offsets,
            vec![(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)]
        );
    }

    #[test]
    fn test_direction_rotation() {
        assert_eq!(Direction::East.rotate(1), Direction::NorthEast);
        assert_eq!(Direction::SouthEast.rotate(1), Direction::East);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);

        for d in Direction::ALL {
            assert_eq!(Hex::from(d) + Hex::from(d.opposite()), Hex::origin());
            assert_eq!(Direction::ALL[d.index()], d);
        }
    }

    #[test]
    fn test_consecutive_directions_differ_by_a_step() {
        // Walking from corner i to corner i+1 of a ring follows direction i+2.
        for d in Direction::ALL {
            assert_eq!(Hex::from(d.rotate(1)) - Hex::from(d), Hex::from(d.rotate(2)));
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(Hex::origin().length(), 0);
        assert_eq!(Hex::new(3, 0).length(), 3);
        assert_eq!(Hex::new(-3, 3).length(), 3);
        assert_eq!(Hex::new(2, 2).length(), 4);
        assert_eq!(Hex::new(1, -2).distance(Hex::new(-1, 1)), 3);
        assert_eq!(Hex::new(2, -1).s(), -1);
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = Hex::new(2, -1);
        let neighbors: Vec<_> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 6);
        for n in &neighbors {
            assert!(center.is_adjacent(*n));
        }
        assert!(!center.is_adjacent(center));
        assert!(!Hex::origin().is_adjacent(Hex::new(2, 2)));
    }

    #[test]
    fn test_neighbors_at_lattice_rim() {
        let rim = Hex::new(i32::MAX, 0);
        let neighbors: Vec<_> = rim.neighbors().collect();
        // East and NorthEast would overflow q.
        assert_eq!(neighbors.len(), 4);
        assert_eq!(rim.neighbor(Direction::East), None);
        assert_eq!(rim.neighbor(Direction::West), Some(Hex::new(i32::MAX - 1, 0)));
        assert!(neighbors.iter().all(|n| n.q == i32::MAX || n.q == i32::MAX - 1));

        let corner = Hex::new(i32::MIN, i32::MIN);
        assert_eq!(corner.neighbors().count(), 2);
    }

    #[test]
    fn test_ordering_is_q_then_r() {
        let mut hexes = vec![Hex::new(1, -1), Hex::new(-1, 1), Hex::new(0, 1), Hex::new(0, -1)];
        hexes.sort();
        assert_eq!(
            hexes,
            vec![Hex::new(-1, 1), Hex::new(0, -1), Hex::new(0, 1), Hex::new(1, -1)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Hex::new(-2, 1)), "(-2, 1)");
    }

    #[test]
    fn test_serialization() {
        let hex = Hex::new(3, -2);
        let json = serde_json::to_string(&hex).unwrap();
        let deserialized: Hex = serde_json::from_str(&json).unwrap();
        assert_eq!(hex, deserialized);
    }
}
