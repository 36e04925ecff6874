//! Spatial data structures for the maze
//!
//! This module contains:
//! - Integer vectors for positions and movements
//! - Rectangles and clipping
//! - The grid of room placements

/// Fixed-size grid of (room, rotation) cells
pub mod grid;
/// Rectangular cell regions
pub mod rect;
/// Integer position and displacement vectors
pub mod vector;

pub use grid::{Cell, MazeGrid};
pub use rect::Rect;
pub use vector::Vector2D;
