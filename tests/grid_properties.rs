//! Property tests for board topology and win-detection invariants.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use hex_void::grid::{ALL_EDGES, EDGE_COUNT};
use hex_void::{GridConfig, Hex, HexGrid, Side, Stone, WinDetector};

proptest! {
    /// Same radius, same topology.
    #[test]
    fn prop_grid_is_deterministic(radius in 1i32..=8) {
        let a = HexGrid::new(radius).unwrap();
        let b = HexGrid::new(radius).unwrap();

        prop_assert_eq!(a.cells(), b.cells());
        prop_assert_eq!(a.edges(), b.edges());
        prop_assert_eq!(a.void_adjacent_hexes(), b.void_adjacent_hexes());
    }

    #[test]
    fn prop_edges_and_void_inside_board(radius in 1i32..=8, void_radius in 1i32..=8) {
        prop_assume!(void_radius <= radius);
        let config = GridConfig::default().with_radius(radius).with_void_radius(void_radius);
        let grid = HexGrid::from_config(&config).unwrap();

        for edge in grid.edges() {
            prop_assert_eq!(edge.len(), radius as usize + 1);
            prop_assert!(edge.iter().all(|h| grid.contains(*h)));
            prop_assert!(edge.iter().all(|h| h.length() == radius));
        }
        prop_assert!(grid.void_adjacent_hexes().iter().all(|h| grid.contains(*h)));
        prop_assert!(grid.void_cells().iter().all(|h| grid.is_void_adjacent(*h)));
    }

    #[test]
    fn prop_cell_count(radius in 1i32..=10) {
        let grid = HexGrid::new(radius).unwrap();
        prop_assert_eq!(grid.cell_count() as i32, 3 * radius * (radius + 1) + 1);
    }

    #[test]
    fn prop_invalid_radius_rejected(radius in -100i32..1) {
        prop_assert!(HexGrid::new(radius).is_err());
    }

    #[test]
    fn prop_void_adjacent_order_is_stable(radius in 1i32..=6) {
        let grid = HexGrid::new(radius).unwrap();
        let first = grid.void_adjacent_hexes().to_vec();
        let second = grid.get_void_adjacent_hexes().to_vec();
        prop_assert_eq!(&first, &second);

        let mut sorted = first.clone();
        sorted.sort();
        prop_assert_eq!(first, sorted);
    }

    #[test]
    fn prop_neighbors_at_distance_one(q in -20i32..=20, r in -20i32..=20) {
        let grid = HexGrid::new(3).unwrap();
        let hex = Hex::new(q, r);
        let neighbors: FxHashSet<Hex> = grid.neighbors(hex).collect();
        prop_assert_eq!(neighbors.len(), 6);
        prop_assert!(neighbors.iter().all(|n| n.distance(hex) == 1));
    }

    /// Encirclement needs stones of both sides.
    #[test]
    fn prop_lone_side_never_encircles(cells in prop::collection::vec((-3i32..=3, -3i32..=3), 0..20)) {
        let grid = HexGrid::new(3).unwrap();
        let detector = WinDetector::new(&grid);
        let stones: FxHashSet<Stone> = cells
            .into_iter()
            .map(|(q, r)| Stone::at(Side::White, q, r))
            .collect();

        prop_assert_eq!(detector.detect_encirclement(&stones, Side::White), None);
        prop_assert_eq!(detector.detect_encirclement(&stones, Side::Red), None);
    }

    /// A completed network stays complete when connected stones are added.
    #[test]
    fn prop_network_stable_under_connected_additions(
        extra in prop::collection::vec(0usize..37, 0..15)
    ) {
        let grid = HexGrid::new(3).unwrap();
        let detector = WinDetector::new(&grid);

        let mut stones: FxHashSet<Stone> = grid
            .cells()
            .iter()
            .filter(|h| h.length() == 3)
            .map(|h| Stone::new(Side::White, *h))
            .collect();
        prop_assert_eq!(detector.detect_network_completion(&stones), Some(Side::White));

        // Grow the group one neighbour at a time so it never splits.
        for index in extra {
            let candidate = grid.cells()[index];
            let touches_group = grid
                .neighbors(candidate)
                .any(|n| stones.contains(&Stone::new(Side::White, n)));
            if touches_group {
                stones.insert(Stone::new(Side::White, candidate));
            }
        }

        prop_assert_eq!(detector.detect_isolation(&stones), None);
        prop_assert_eq!(detector.detect_network_completion(&stones), Some(Side::White));
    }

    /// Every boundary cell's edge mask is non-empty and only corners hit two edges.
    #[test]
    fn prop_edge_masks(radius in 1i32..=8) {
        let grid = HexGrid::new(radius).unwrap();
        let mut union = 0u8;
        for hex in grid.cells() {
            let mask = grid.edge_mask(*hex);
            union |= mask;
            prop_assert_eq!(mask != 0, hex.length() == radius);
            prop_assert!(mask.count_ones() <= 2);
        }
        prop_assert_eq!(union, ALL_EDGES);
        prop_assert_eq!(grid.edges().len(), EDGE_COUNT);
    }
}
