//! Text table rendering of a grid for inspection and CLI output
//!
//! Layout of a 2x1 grid with one room:
//!
//! ```text
//! Maze layout: 2 x 1 - ( Room / Rotation )
//!
//!  ---------------------------
//! |     |     0    |     1    |
//! |-----+----------+----------|
//! |  0  |  3 /  90 |  - /   - |
//!  ---------------------------
//! ```

use std::fmt::{self, Write};

use crate::io::configuration::{
    INDEX_FIELD_WIDTH, ROOM_FIELD_WIDTH, ROTATION_FIELD_WIDTH, UNSET_MARKER,
};
use crate::spatial::grid::{Cell, MazeGrid};

const MARGIN: &str = "-----";
const COLUMN_RULE: &str = "----------";

/// Render the grid as a bordered table of `room / rotation` fields
pub fn render_layout(grid: &MazeGrid) -> String {
    grid.to_string()
}

/// Write the table for `grid` into any formatter or string
///
/// # Errors
///
/// Propagates errors from the underlying writer
pub fn write_layout(grid: &MazeGrid, out: &mut impl Write) -> fmt::Result {
    let (width, height) = grid.dimensions();
    writeln!(out, "Maze layout: {width} x {height} - ( Room / Rotation )")?;
    writeln!(out)?;

    let border = format!(" {MARGIN}{}", format!("-{COLUMN_RULE}").repeat(width));
    writeln!(out, "{border}")?;

    write!(out, "|{:5}", "")?;
    for x in 0..width {
        write!(out, "|    {x:>INDEX_FIELD_WIDTH$}    ")?;
    }
    writeln!(out, "|")?;

    for y in 0..height {
        writeln!(out, "|{MARGIN}{}|", format!("+{COLUMN_RULE}").repeat(width))?;
        write!(out, "| {y:>INDEX_FIELD_WIDTH$}  ")?;
        for cell in grid.row(y) {
            write_cell(cell, out)?;
        }
        writeln!(out, "|")?;
    }

    writeln!(out, "{border}")
}

fn write_cell(cell: Cell, out: &mut impl Write) -> fmt::Result {
    if cell.is_set() {
        write!(
            out,
            "| {:>ROOM_FIELD_WIDTH$} / {:>ROTATION_FIELD_WIDTH$} ",
            cell.room, cell.rotation
        )
    } else {
        write!(
            out,
            "| {UNSET_MARKER:>ROOM_FIELD_WIDTH$} / {UNSET_MARKER:>ROTATION_FIELD_WIDTH$} "
        )
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_layout(self, f)
    }
}
