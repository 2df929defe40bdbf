//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Hex, Side, Stone};

/// Python wrapper for Hex.
#[pyclass(name = "Hex", frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PyHex(pub Hex);

#[pymethods]
impl PyHex {
    /// Create an axial coordinate.
    #[new]
    fn new(q: i32, r: i32) -> Self {
        Self(Hex::new(q, r))
    }

    #[getter]
    fn q(&self) -> i32 {
        self.0.q
    }

    #[getter]
    fn r(&self) -> i32 {
        self.0.r
    }

    /// Number of steps to another hex.
    fn distance(&self, other: &PyHex) -> i32 {
        self.0.distance(other.0)
    }

    /// Adjacent coordinates, unfiltered by any board.
    fn neighbors(&self) -> Vec<PyHex> {
        self.0.neighbors().map(PyHex).collect()
    }

    fn __repr__(&self) -> String {
        format!("Hex({}, {})", self.0.q, self.0.r)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        // Both coordinates packed into one word.
        ((self.0.q as u32 as u64) << 32) | (self.0.r as u32 as u64)
    }
}

/// Python wrapper for Side.
///
/// Use the class attributes `Side.WHITE` and `Side.RED`.
#[pyclass(name = "Side", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PySide(pub Side);

#[pymethods]
impl PySide {
    #[classattr]
    const WHITE: PySide = PySide(Side::White);

    #[classattr]
    const RED: PySide = PySide(Side::Red);

    /// The other side.
    fn opponent(&self) -> PySide {
        PySide(self.0.opponent())
    }

    #[getter]
    fn name(&self) -> String {
        self.0.to_string().to_uppercase()
    }

    fn __repr__(&self) -> String {
        format!("Side.{}", self.name())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for Stone.
#[pyclass(name = "Stone", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyStone(pub Stone);

#[pymethods]
impl PyStone {
    /// Create a stone for `side` on `hex`.
    #[new]
    fn new(side: &PySide, hex: &PyHex) -> Self {
        Self(Stone::new(side.0, hex.0))
    }

    #[getter]
    fn side(&self) -> PySide {
        PySide(self.0.side)
    }

    #[getter]
    fn hex(&self) -> PyHex {
        PyHex(self.0.hex)
    }

    fn __repr__(&self) -> String {
        format!("Stone(Side.{}, Hex({}, {}))", PySide(self.0.side).name(), self.0.hex.q, self.0.hex.r)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
