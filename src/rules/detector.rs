//! Win detection over a stone snapshot.
//!
//! `WinDetector` borrows a [`HexGrid`] and answers one question per call:
//! given these stones, has a side won? It keeps no state between calls, so a
//! single grid may back any number of detectors on any number of threads.
//!
//! ## Conditions
//!
//! | Condition          | Scans            | Winner                        |
//! |--------------------|------------------|-------------------------------|
//! | Isolation          | both sides       | opponent of the fragmented side |
//! | Territory control  | both sides       | sole majority holder          |
//! | Encirclement       | reference side   | reference side                |
//! | Network completion | both sides       | side whose group hits 6 edges |
//!
//! Side-agnostic conditions scan [`Side::ALL`] in order and report the first
//! side that satisfies them.

use crate::core::{Hex, Side, SideMap, Stone};
use crate::grid::{HexGrid, ALL_EDGES};

use super::condition::{Victory, WinCondition};
use super::position::Position;

/// Stateless win adjudicator bound to one board topology.
///
/// ## Example
///
/// ```
/// use hex_void::core::{Side, Stone};
/// use hex_void::grid::HexGrid;
/// use hex_void::rules::{WinCondition, WinDetector};
///
/// let grid = HexGrid::new(3).unwrap();
/// let detector = WinDetector::new(&grid);
///
/// // White is split into two groups, so Red wins.
/// let stones = vec![Stone::at(Side::White, 0, 0), Stone::at(Side::White, 2, 0)];
/// assert_eq!(detector.check_winner(&stones, Side::White), Some(Side::Red));
///
/// let victory = detector.check_victory(&stones, Side::White).unwrap();
/// assert_eq!(victory.condition, WinCondition::Isolation);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WinDetector<'g> {
    grid: &'g HexGrid,
}

impl<'g> WinDetector<'g> {
    #[must_use]
    pub fn new(grid: &'g HexGrid) -> Self {
        Self { grid }
    }

    #[must_use]
    pub fn grid(&self) -> &'g HexGrid {
        self.grid
    }

    /// Decide the game, or `None` if it continues.
    ///
    /// `reference_side` is the side whose move just completed; only
    /// encirclement depends on it.
    pub fn check_winner<'a, I>(&self, stones: I, reference_side: Side) -> Option<Side>
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        self.check_victory(stones, reference_side)
            .map(|victory| victory.winner)
    }

    /// Like [`check_winner`](Self::check_winner), also naming the condition that fired.
    pub fn check_victory<'a, I>(&self, stones: I, reference_side: Side) -> Option<Victory>
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        let position = Position::from_stones(stones);
        self.evaluate_position(&position, reference_side)
    }

    /// Run every condition in [`WinCondition::PRIORITY`] order over an indexed position.
    pub fn evaluate_position(&self, position: &Position, reference_side: Side) -> Option<Victory> {
        for condition in WinCondition::PRIORITY {
            if let Some(winner) = self.evaluate(condition, position, reference_side) {
                tracing::debug!(%condition, %winner, stones = position.len(), "win condition met");
                return Some(Victory::new(winner, condition));
            }
            tracing::trace!(%condition, "win condition not met");
        }
        None
    }

    /// Run a single condition.
    pub fn evaluate(
        &self,
        condition: WinCondition,
        position: &Position,
        reference_side: Side,
    ) -> Option<Side> {
        match condition {
            WinCondition::Isolation => self.isolation(position),
            WinCondition::TerritoryControl => self.territory_control(position),
            WinCondition::Encirclement => self.encirclement(position, reference_side),
            WinCondition::NetworkCompletion => self.network_completion(position),
        }
    }

    // === Individual conditions ===

    /// The opponent of a side whose two or more stones are not all connected.
    ///
    /// Returns `None` when neither side, or both sides, are fragmented.
    pub fn detect_isolation<'a, I>(&self, stones: I) -> Option<Side>
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        self.isolation(&Position::from_stones(stones))
    }

    /// The side that alone holds a strict majority of the void-adjacent cells.
    pub fn detect_territory_control<'a, I>(&self, stones: I) -> Option<Side>
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        self.territory_control(&Position::from_stones(stones))
    }

    /// `reference_side`, if it occupies all six on-board neighbours of some
    /// enemy stone.
    pub fn detect_encirclement<'a, I>(&self, stones: I, reference_side: Side) -> Option<Side>
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        self.encirclement(&Position::from_stones(stones), reference_side)
    }

    /// The side owning one connected group that touches all six edges.
    pub fn detect_network_completion<'a, I>(&self, stones: I) -> Option<Side>
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        self.network_completion(&Position::from_stones(stones))
    }

    fn isolation(&self, position: &Position) -> Option<Side> {
        let fragmented = SideMap::new(|side| {
            position.count(side) >= 2 && position.groups(side).len() > 1
        });

        match (fragmented[Side::White], fragmented[Side::Red]) {
            (true, false) => Some(Side::Red),
            (false, true) => Some(Side::White),
            // Both or neither fragmented: no decision from this check.
            _ => None,
        }
    }

    fn territory_control(&self, position: &Position) -> Option<Side> {
        let territory = self.grid.void_adjacent_hexes();

        let mut held: SideMap<usize> = SideMap::default();
        for &hex in territory {
            if let Some(side) = position.side_at(hex) {
                held[side] += 1;
            }
        }

        let half = territory.len() / 2;
        Side::ALL
            .into_iter()
            .find(|&side| held[side] > half && held[side.opponent()] == 0)
    }

    fn encirclement(&self, position: &Position, reference_side: Side) -> Option<Side> {
        let enemy = reference_side.opponent();
        position
            .stones_of(enemy)
            .iter()
            .any(|&hex| self.is_surrounded_by(position, hex, reference_side))
            .then_some(reference_side)
    }

    /// All six neighbours on the board and held by `side`.
    fn is_surrounded_by(&self, position: &Position, hex: Hex, side: Side) -> bool {
        self.grid
            .neighbors(hex)
            .filter(|&n| self.grid.contains(n) && position.is_occupied_by(n, side))
            .count()
            == 6
    }

    fn network_completion(&self, position: &Position) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| {
            position
                .groups(side)
                .iter()
                .any(|group| self.edges_touched(group) == ALL_EDGES)
        })
    }

    /// Bitmask of edges touched by any hex in `group`.
    fn edges_touched(&self, group: &[Hex]) -> u8 {
        group
            .iter()
            .fold(0, |mask, &hex| mask | self.grid.edge_mask(hex))
    }
}
