//! Fixed-size grid of room placements
//!
//! Each cell stores which room occupies it and how far that room is rotated.
//! Cells are addressed by [`Vector2D`] positions with `x` running east-west
//! and `y` running north-south. Single-cell access is bounds checked and
//! fails without touching the grid; block moves clip against the grid edges
//! instead of failing.

use log::debug;
use ndarray::{Array2, s};

use crate::io::configuration::{DEFAULT_ROTATION, FULL_TURN_DEGREES, MAX_GRID_DIMENSION, UNSET};
use crate::io::error::{MazeError, Result, invalid_parameter, out_of_bounds};
use crate::math::rounding::wrapping_sum;
use crate::spatial::rect::Rect;
use crate::spatial::vector::Vector2D;

/// Room identifier and rotation held by one grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Identifier of the room tile, [`UNSET`] if empty
    pub room: i32,
    /// Clockwise rotation in degrees, [`UNSET`] if empty
    pub rotation: i32,
}

impl Cell {
    /// Cell with no room placed
    pub const UNSET: Self = Self::new(UNSET, UNSET);

    /// Create a cell holding `room` turned by `rotation` degrees
    pub const fn new(room: i32, rotation: i32) -> Self {
        Self { room, rotation }
    }

    /// Check whether a room occupies the cell
    ///
    /// Only the room decides: [`MazeGrid::set_room`] never stores the
    /// [`UNSET`] room, so an empty room always comes with an empty rotation.
    pub const fn is_set(&self) -> bool {
        self.room != UNSET
    }

    /// Contents as a `(room, rotation)` tuple
    pub const fn pair(&self) -> (i32, i32) {
        (self.room, self.rotation)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<(i32, i32)> for Cell {
    fn from((room, rotation): (i32, i32)) -> Self {
        Self::new(room, rotation)
    }
}

/// Maze state: a `width x height` array of [`Cell`]s
///
/// Dimensions are fixed at construction. The cell array is stored `[x, y]`
/// so that a column of the maze is contiguous along the second axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
}

impl MazeGrid {
    /// Create a grid with every cell unset
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either side is zero or
    /// exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let reason = if width == 0 || height == 0 {
            Some("both sides must be positive")
        } else if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            Some("side exceeds the maximum grid dimension")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason,
            });
        }

        Ok(Self {
            cells: Array2::from_elem((width, height), Cell::UNSET),
            width,
            height,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells
    pub const fn size(&self) -> usize {
        self.width * self.height
    }

    /// Rectangle covering the whole grid
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Check if a position addresses a cell of this grid
    pub const fn contains(&self, pos: Vector2D) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Vector2D) -> Result<[usize; 2]> {
        if self.contains(pos) {
            Ok([pos.x as usize, pos.y as usize])
        } else {
            Err(out_of_bounds(pos, self.dimensions()))
        }
    }

    fn cell_mut(&mut self, pos: Vector2D) -> Result<&mut Cell> {
        let index = self.index(pos)?;
        let dimensions = self.dimensions();
        self.cells
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(pos, dimensions))
    }

    /// Place `room` at `pos` with the given rotation
    ///
    /// The rotation is stored as given; only [`MazeGrid::rotate_room`]
    /// normalizes it. The [`UNSET`] room id is reserved for empty cells, so a
    /// cell whose room is [`UNSET`] is always exactly [`Cell::UNSET`]; use
    /// [`MazeGrid::clear_room`] to empty a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is outside the grid, or
    /// [`MazeError::InvalidParameter`] if `room` is [`UNSET`]
    pub fn set_room(&mut self, pos: Vector2D, room: i32, rotation: i32) -> Result<()> {
        let cell = self.cell_mut(pos)?;
        if room == UNSET {
            return Err(invalid_parameter(
                "room",
                &room,
                &"reserved for empty cells, clear the cell instead",
            ));
        }
        *cell = Cell::new(room, rotation);
        Ok(())
    }

    /// Place `room` at `pos` without rotation
    ///
    /// # Errors
    ///
    /// Same as [`MazeGrid::set_room`]
    pub fn place_room(&mut self, pos: Vector2D, room: i32) -> Result<()> {
        self.set_room(pos, room, DEFAULT_ROTATION)
    }

    /// Contents of the cell at `pos`, [`Cell::UNSET`] if nothing was placed
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is outside the grid
    pub fn get_room(&self, pos: Vector2D) -> Result<Cell> {
        let index = self.index(pos)?;
        self.cells
            .get(index)
            .copied()
            .ok_or_else(|| out_of_bounds(pos, self.dimensions()))
    }

    /// Remove the room at `pos`, returning what was there
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is outside the grid
    pub fn clear_room(&mut self, pos: Vector2D) -> Result<Cell> {
        let cell = self.cell_mut(pos)?;
        Ok(std::mem::replace(cell, Cell::UNSET))
    }

    /// Turn the room at `pos` by `delta` degrees and return its new rotation
    ///
    /// The result is always in `[0, 360)`, for negative deltas too.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `pos` is outside the grid, or
    /// [`MazeError::UnsetRoom`] if no room is placed there
    pub fn rotate_room(&mut self, pos: Vector2D, delta: i32) -> Result<i32> {
        let cell = self.cell_mut(pos)?;
        if !cell.is_set() {
            return Err(MazeError::UnsetRoom { position: pos });
        }
        cell.rotation = wrapping_sum(cell.rotation, delta, FULL_TURN_DEGREES);
        Ok(cell.rotation)
    }

    /// Move a rectangular block of cells by `offset`
    ///
    /// The source is clipped to the grid first. Vacated cells become unset,
    /// and the part of the block that lands outside the grid is dropped.
    /// Cells outside both source and destination keep their contents.
    ///
    /// Returns the rectangle that received cells, or `None` when nothing was
    /// written (empty source, or the whole block moved off the grid).
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidParameter`] if the source has a negative
    /// width or height. The grid is unchanged in that case.
    pub fn move_block(&mut self, source: Rect, offset: Vector2D) -> Result<Option<Rect>> {
        if source.is_inverted() {
            return Err(invalid_parameter(
                "source",
                &source,
                &"block extent must not be negative",
            ));
        }

        let Some(source) = source.clip_to(self.width, self.height) else {
            debug!("Block move skipped: source lies outside the grid");
            return Ok(None);
        };

        let source_slice = s![source.column_range(), source.row_range()];
        let block = self.cells.slice(&source_slice).to_owned();
        self.cells.slice_mut(&source_slice).fill(Cell::UNSET);

        let destination = source.translated(offset);
        let Some(landing) = destination.clip_to(self.width, self.height) else {
            debug!(
                "Block {source} moved by ({}, {}) left the grid; {} cells discarded",
                offset.x,
                offset.y,
                source.area()
            );
            return Ok(None);
        };

        // Position of the landing area inside the copied block
        let skipped = landing.origin() - destination.origin();
        let kept = Rect::from_corners(skipped, landing.extent());
        self.cells
            .slice_mut(s![landing.column_range(), landing.row_range()])
            .assign(&block.slice(s![kept.column_range(), kept.row_range()]));

        if landing.area() < source.area() {
            debug!(
                "Block {source} clipped to {landing}; {} cells discarded",
                source.area() - landing.area()
            );
        }

        Ok(Some(landing))
    }

    /// Positions and contents of every cell holding a room, column by column
    pub fn occupied(&self) -> impl Iterator<Item = (Vector2D, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_set())
            .map(|((x, y), cell)| (Vector2D::new(x as i32, y as i32), *cell))
    }

    /// Number of cells holding a room
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_set()).count()
    }

    /// Iterate over one row of the grid from west to east
    ///
    /// Rows past the bottom edge yield nothing.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width).filter_map(move |x| self.cells.get([x, y]).copied())
    }
}
