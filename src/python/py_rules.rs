//! Grid and win detection bindings for Python.

use std::collections::HashSet;
use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GridConfig, Stone};
use crate::grid::HexGrid;
use crate::rules::{Position, WinCondition, WinDetector};

use super::py_core::{PyHex, PySide, PyStone};

/// Collect any Python iterable of `Stone` (set, list, tuple).
fn extract_stones(stones: &Bound<'_, PyAny>) -> PyResult<Vec<Stone>> {
    stones
        .iter()?
        .map(|item| Ok(item?.extract::<PyStone>()?.0))
        .collect()
}

/// Each edge as a set of hexes, indexed like [`HexGrid::edges`].
fn edge_sets(grid: &HexGrid) -> Vec<HashSet<PyHex>> {
    grid.edges()
        .iter()
        .map(|edge| edge.iter().copied().map(PyHex).collect())
        .collect()
}

/// Python wrapper for HexGrid.
///
/// The grid is shared with every `WinDetector` built from it.
#[pyclass(name = "HexGrid", frozen)]
#[derive(Clone)]
pub struct PyHexGrid(pub Arc<HexGrid>);

#[pymethods]
impl PyHexGrid {
    /// Build a board.
    ///
    /// # Arguments
    /// - radius: Board radius (>= 1)
    /// - void_radius: Cells closer than this to the centre form the void
    ///
    /// Raises ValueError for an invalid size.
    #[new]
    #[pyo3(signature = (radius = 3, void_radius = 1))]
    fn new(radius: i32, void_radius: i32) -> PyResult<Self> {
        let config = GridConfig::default()
            .with_radius(radius)
            .with_void_radius(void_radius);
        HexGrid::from_config(&config)
            .map(|grid| Self(Arc::new(grid)))
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn radius(&self) -> i32 {
        self.0.radius()
    }

    /// The six edges as Python sets of Hex.
    #[getter]
    fn edges(&self) -> Vec<HashSet<PyHex>> {
        edge_sets(&self.0)
    }

    /// All playable cells, sorted by (q, r).
    fn cells(&self) -> Vec<PyHex> {
        self.0.cells().iter().copied().map(PyHex).collect()
    }

    fn contains(&self, hex: &PyHex) -> bool {
        self.0.contains(hex.0)
    }

    /// Adjacent coordinates, unfiltered by the board.
    fn neighbors(&self, hex: &PyHex) -> Vec<PyHex> {
        self.0.neighbors(hex.0).map(PyHex).collect()
    }

    /// Contested cells around the void in a stable order.
    fn get_void_adjacent_hexes(&self) -> Vec<PyHex> {
        self.0
            .void_adjacent_hexes()
            .iter()
            .copied()
            .map(PyHex)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "HexGrid(radius={}, void_radius={}, cells={})",
            self.0.radius(),
            self.0.void_radius(),
            self.0.cell_count()
        )
    }
}

/// Python wrapper for WinDetector.
#[pyclass(name = "WinDetector", frozen)]
pub struct PyWinDetector {
    grid: Arc<HexGrid>,
}

impl PyWinDetector {
    fn detector(&self) -> WinDetector<'_> {
        WinDetector::new(&self.grid)
    }

    fn run(
        &self,
        condition: WinCondition,
        stones: &Bound<'_, PyAny>,
        reference_side: PySide,
    ) -> PyResult<Option<PySide>> {
        let stones = extract_stones(stones)?;
        let position = Position::from_stones(&stones);
        Ok(self
            .detector()
            .evaluate(condition, &position, reference_side.0)
            .map(PySide))
    }
}

#[pymethods]
impl PyWinDetector {
    #[new]
    fn new(grid: &PyHexGrid) -> Self {
        Self {
            grid: Arc::clone(&grid.0),
        }
    }

    /// Decide the game for a set of stones.
    ///
    /// Returns the winning Side, or None if the game continues.
    fn check_winner(
        &self,
        stones: &Bound<'_, PyAny>,
        reference_side: &PySide,
    ) -> PyResult<Option<PySide>> {
        let stones = extract_stones(stones)?;
        Ok(self
            .detector()
            .check_winner(&stones, reference_side.0)
            .map(PySide))
    }

    /// Like check_winner, also returning the name of the condition that fired.
    fn check_victory(
        &self,
        stones: &Bound<'_, PyAny>,
        reference_side: &PySide,
    ) -> PyResult<Option<(PySide, &'static str)>> {
        let stones = extract_stones(stones)?;
        Ok(self
            .detector()
            .check_victory(&stones, reference_side.0)
            .map(|v| (PySide(v.winner), v.condition.name())))
    }

    fn detect_isolation(&self, stones: &Bound<'_, PyAny>) -> PyResult<Option<PySide>> {
        self.run(WinCondition::Isolation, stones, PySide::WHITE)
    }

    fn detect_territory_control(&self, stones: &Bound<'_, PyAny>) -> PyResult<Option<PySide>> {
        self.run(WinCondition::TerritoryControl, stones, PySide::WHITE)
    }

    fn detect_encirclement(
        &self,
        stones: &Bound<'_, PyAny>,
        reference_side: &PySide,
    ) -> PyResult<Option<PySide>> {
        self.run(WinCondition::Encirclement, stones, *reference_side)
    }

    fn detect_network_completion(&self, stones: &Bound<'_, PyAny>) -> PyResult<Option<PySide>> {
        self.run(WinCondition::NetworkCompletion, stones, PySide::WHITE)
    }

    fn __repr__(&self) -> String {
        format!("WinDetector(radius={})", self.grid.radius())
    }
}
