//! Static board topology derived from a radius.
//!
//! The `HexGrid` owns every set the win conditions query:
//! - `cells`: all hexes within `radius` of the origin
//! - `edges`: six boundary sides, corners shared by adjacent sides
//! - `void` / `void_adjacent`: the central hole and the contested cells around it
//!
//! All of it is computed once in the constructor and never changes.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::core::{Direction, GridConfig, Hex};
use crate::error::Result;

/// Number of boundary sides on a hexagonal board.
pub const EDGE_COUNT: usize = 6;

/// Bitmask with one bit set per edge.
pub const ALL_EDGES: u8 = (1 << EDGE_COUNT) - 1;

/// Immutable topology of a radius-N hexagonal board.
///
/// ## Usage
///
/// ```
/// use hex_void::core::Hex;
/// use hex_void::grid::HexGrid;
///
/// let grid = HexGrid::new(3).unwrap();
///
/// assert_eq!(grid.cell_count(), 37);
/// assert!(grid.contains(Hex::new(3, -3)));
/// assert!(!grid.contains(Hex::new(2, 2)));
///
/// // Corner cells sit on two edges.
/// assert_eq!(grid.edge_mask(Hex::new(3, 0)).count_ones(), 2);
///
/// // The centre and its ring are contested territory.
/// assert_eq!(grid.void_adjacent_hexes().len(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct HexGrid {
    config: GridConfig,

    /// Sorted by `(q, r)`.
    cells: Vec<Hex>,
    cell_set: FxHashSet<Hex>,

    /// `edges[i]` runs from corner `radius * ALL[i]` to corner `radius * ALL[i + 1]`.
    edges: [FxHashSet<Hex>; EDGE_COUNT],

    /// Boundary cell -> bitmask of edges it belongs to.
    edge_masks: FxHashMap<Hex, u8>,

    void_cells: FxHashSet<Hex>,

    /// Sorted by `(q, r)`.
    void_adjacent: Vec<Hex>,
    void_adjacent_set: FxHashSet<Hex>,
}

impl HexGrid {
    /// Build a board of the given radius with the default single-cell void.
    ///
    /// Fails with `InvalidBoardSize` if `radius < 1`.
    pub fn new(radius: i32) -> Result<Self> {
        Self::from_config(&GridConfig::default().with_radius(radius))
    }

    /// Build a board from a full configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        let radius = config.radius;

        let cells: Vec<Hex> = (-radius..=radius)
            .flat_map(|q| {
                let r_min = (-radius).max(-q - radius);
                let r_max = radius.min(-q + radius);
                (r_min..=r_max).map(move |r| Hex::new(q, r))
            })
            .collect();
        let cell_set: FxHashSet<Hex> = cells.iter().copied().collect();

        let edges: [FxHashSet<Hex>; EDGE_COUNT] = std::array::from_fn(|i| {
            let direction = Direction::ALL[i];
            let corner = Hex::from(direction).scale(radius);
            let step = Hex::from(direction.rotate(2));
            (0..=radius).map(|k| corner + step.scale(k)).collect()
        });

        let mut edge_masks: FxHashMap<Hex, u8> = FxHashMap::default();
        for (i, edge) in edges.iter().enumerate() {
            for hex in edge {
                *edge_masks.entry(*hex).or_default() |= 1 << i;
            }
        }

        let void_cells: FxHashSet<Hex> = cells
            .iter()
            .copied()
            .filter(|h| h.length() < config.void_radius)
            .collect();

        // Void cells and every cell touching them.
        let void_adjacent: Vec<Hex> = cells
            .iter()
            .copied()
            .filter(|h| h.length() <= config.void_radius)
            .collect();
        let void_adjacent_set: FxHashSet<Hex> = void_adjacent.iter().copied().collect();

        tracing::debug!(
            radius,
            void_radius = config.void_radius,
            cells = cells.len(),
            void_adjacent = void_adjacent.len(),
            "built hex grid"
        );

        Ok(Self {
            config: config.clone(),
            cells,
            cell_set,
            edges,
            edge_masks,
            void_cells,
            void_adjacent,
            void_adjacent_set,
        })
    }

    /// The configuration this grid was built from.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn radius(&self) -> i32 {
        self.config.radius
    }

    #[must_use]
    pub fn void_radius(&self) -> i32 {
        self.config.void_radius
    }

    /// All playable cells, sorted by `(q, r)`.
    #[must_use]
    pub fn cells(&self) -> &[Hex] {
        &self.cells
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a hex lies on the board.
    #[must_use]
    pub fn contains(&self, hex: Hex) -> bool {
        self.cell_set.contains(&hex)
    }

    /// Coordinates adjacent to `hex`, including off-board ones. Six unless
    /// `hex` sits at the rim of the `i32` range.
    pub fn neighbors(&self, hex: Hex) -> impl Iterator<Item = Hex> {
        hex.neighbors()
    }

    /// Adjacent cells that lie on the board.
    pub fn board_neighbors(&self, hex: Hex) -> SmallVec<[Hex; 6]> {
        hex.neighbors().filter(|n| self.contains(*n)).collect()
    }

    /// The six edge sets, indexed 0..6.
    #[must_use]
    pub fn edges(&self) -> &[FxHashSet<Hex>; EDGE_COUNT] {
        &self.edges
    }

    /// A single edge set. Panics if `index >= 6`.
    #[must_use]
    pub fn edge(&self, index: usize) -> &FxHashSet<Hex> {
        &self.edges[index]
    }

    /// Bitmask of the edges `hex` belongs to (bit `i` for edge `i`).
    ///
    /// Zero for interior and off-board cells.
    #[must_use]
    pub fn edge_mask(&self, hex: Hex) -> u8 {
        self.edge_masks.get(&hex).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_edge(&self, hex: Hex) -> bool {
        self.edge_masks.contains_key(&hex)
    }

    #[must_use]
    pub fn is_void(&self, hex: Hex) -> bool {
        self.void_cells.contains(&hex)
    }

    /// Cells forming the central void.
    #[must_use]
    pub fn void_cells(&self) -> &FxHashSet<Hex> {
        &self.void_cells
    }

    /// Contested cells around the void, sorted by `(q, r)`.
    ///
    /// The order is stable for the lifetime of the grid, so callers may take
    /// a deterministic prefix.
    #[must_use]
    pub fn void_adjacent_hexes(&self) -> &[Hex] {
        &self.void_adjacent
    }

    /// Alias of [`void_adjacent_hexes`](Self::void_adjacent_hexes).
    #[must_use]
    pub fn get_void_adjacent_hexes(&self) -> &[Hex] {
        self.void_adjacent_hexes()
    }

    #[must_use]
    pub fn is_void_adjacent(&self, hex: Hex) -> bool {
        self.void_adjacent_set.contains(&hex)
    }
}
