//! Win adjudication.
//!
//! After each placement the game loop hands the full stone snapshot to
//! [`WinDetector::check_winner`], which runs four conditions in fixed
//! priority order:
//! - Isolation
//! - Territory control
//! - Encirclement
//! - Network completion
//!
//! The first condition to name a winner decides the game. Each condition is
//! also callable on its own for diagnostics and UI highlighting.

pub mod condition;
pub mod detector;
pub mod position;

pub use condition::{Victory, WinCondition};
pub use detector::WinDetector;
pub use position::Position;
