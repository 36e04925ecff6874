//! Fixed-size grid of placeable, rotatable maze rooms
//!
//! A [`MazeGrid`] stores a room identifier and a rotation for every cell.
//! Rooms can be placed, queried, rotated and moved around in rectangular
//! blocks; [`Vector2D`] provides the integer arithmetic used to address cells
//! and describe movement.

#![deny(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Integer rounding and modulo helpers
pub mod math;
/// Vectors, rectangles and the room grid
pub mod spatial;

pub use io::error::{MazeError, Result};
pub use spatial::{Cell, MazeGrid, Rect, Vector2D};
