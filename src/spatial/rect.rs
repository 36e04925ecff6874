//! Axis-aligned rectangles of cells and clipping against grid bounds

use std::fmt;
use std::ops::Range;

use crate::spatial::vector::Vector2D;

/// Rectangle of cells given by its top-left corner and extent
///
/// Extents are signed so that caller input can be represented and rejected;
/// only rectangles with non-negative width and height cover any cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost column (inclusive)
    pub left: i32,
    /// Topmost row (inclusive)
    pub top: i32,
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its corner and extent
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from a corner position and a size vector
    pub const fn from_corners(origin: Vector2D, size: Vector2D) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Top-left corner
    pub const fn origin(&self) -> Vector2D {
        Vector2D::new(self.left, self.top)
    }

    /// Width and height as a vector
    pub const fn extent(&self) -> Vector2D {
        Vector2D::new(self.width, self.height)
    }

    /// True if either extent is negative
    pub const fn is_inverted(&self) -> bool {
        self.width < 0 || self.height < 0
    }

    /// True if the rectangle covers no cells
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// Exclusive right edge
    const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge
    const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Same rectangle moved by `offset`
    pub const fn translated(&self, offset: Vector2D) -> Self {
        Self::new(
            self.left.saturating_add(offset.x),
            self.top.saturating_add(offset.y),
            self.width,
            self.height,
        )
    }

    /// Check if a position lies inside the rectangle
    pub const fn contains(&self, pos: Vector2D) -> bool {
        pos.x >= self.left && pos.x < self.right() && pos.y >= self.top && pos.y < self.bottom()
    }

    /// Intersection with the grid area `[0, width) x [0, height)`
    ///
    /// Returns `None` when nothing of the rectangle lies inside the grid.
    pub fn clip_to(&self, width: usize, height: usize) -> Option<Self> {
        let max_x = i32::try_from(width).unwrap_or(i32::MAX);
        let max_y = i32::try_from(height).unwrap_or(i32::MAX);

        let left = self.left.clamp(0, max_x);
        let top = self.top.clamp(0, max_y);
        let right = self.right().clamp(0, max_x);
        let bottom = self.bottom().clamp(0, max_y);

        (right > left && bottom > top).then(|| Self::new(left, top, right - left, bottom - top))
    }

    /// Column indices covered, for a rectangle already clipped to a grid
    pub const fn column_range(&self) -> Range<usize> {
        self.left as usize..self.right() as usize
    }

    /// Row indices covered, for a rectangle already clipped to a grid
    pub const fn row_range(&self) -> Range<usize> {
        self.top as usize..self.bottom() as usize
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.left, self.top
        )
    }
}
