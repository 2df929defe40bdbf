//! Python bindings for the hex-void rules core.
//!
//! # Quick Start
//!
//! ```python
//! from hex_void import Hex, HexGrid, Side, Stone, WinDetector
//!
//! grid = HexGrid(3)
//! detector = WinDetector(grid)
//!
//! stones = {Stone(Side.WHITE, Hex(0, 0)), Stone(Side.WHITE, Hex(2, 0))}
//! assert detector.check_winner(stones, Side.WHITE) == Side.RED
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_rules;

pub use py_core::*;
pub use py_rules::*;

/// hex_void: win adjudication for a hexagonal board with a central void.
#[pymodule]
fn hex_void(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyHex>()?;
    m.add_class::<PySide>()?;
    m.add_class::<PyStone>()?;

    // Rules
    m.add_class::<PyHexGrid>()?;
    m.add_class::<PyWinDetector>()?;

    Ok(())
}
