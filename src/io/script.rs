//! Line-oriented command scripts that build and manipulate a grid
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! grid 5 3                  # fresh 5x3 grid, discarding earlier state
//! set 3 1 1 90              # room 1 at (3, 1) turned 90 degrees
//! set 2 2 2                 # room 2 at (2, 2), rotation defaults to 0
//! rotate 3 1 -90
//! clear 2 2
//! move 2 1 2 2 -1 -1        # LEFT TOP WIDTH HEIGHT DX DY
//! show                      # snapshot the current layout
//! ```

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::io::configuration::{COMMENT_PREFIX, DEFAULT_ROTATION};
use crate::io::error::{MazeError, Result, WithContext, script_error};
use crate::io::render::render_layout;
use crate::spatial::grid::MazeGrid;
use crate::spatial::rect::Rect;
use crate::spatial::vector::Vector2D;

const GRID_USAGE: &str = "grid WIDTH HEIGHT";
const SET_USAGE: &str = "set X Y ROOM [ROTATION]";
const ROTATE_USAGE: &str = "rotate X Y DELTA";
const CLEAR_USAGE: &str = "clear X Y";
const MOVE_USAGE: &str = "move LEFT TOP WIDTH HEIGHT DX DY";

/// A single grid operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the grid with a fresh one of the given size
    Grid {
        /// Number of columns
        width: usize,
        /// Number of rows
        height: usize,
    },
    /// Place a room
    Set {
        /// Target cell
        position: Vector2D,
        /// Room identifier
        room: i32,
        /// Rotation in degrees, stored verbatim
        rotation: i32,
    },
    /// Turn a placed room
    Rotate {
        /// Target cell
        position: Vector2D,
        /// Degrees to add to the current rotation
        delta: i32,
    },
    /// Remove a room
    Clear {
        /// Target cell
        position: Vector2D,
    },
    /// Move a block of cells
    Move {
        /// Block to move
        source: Rect,
        /// Displacement of the block
        offset: Vector2D,
    },
    /// Record the current layout in the output
    Show,
}

impl Command {
    /// Execute the command against `grid`
    ///
    /// [`Command::Show`] leaves the grid untouched; recording the layout is
    /// up to the caller.
    ///
    /// # Errors
    ///
    /// Returns the grid error raised by the operation
    pub fn apply(&self, grid: &mut MazeGrid) -> Result<()> {
        match *self {
            Self::Grid { width, height } => *grid = MazeGrid::new(width, height)?,
            Self::Set {
                position,
                room,
                rotation,
            } => grid.set_room(position, room, rotation)?,
            Self::Rotate { position, delta } => {
                grid.rotate_room(position, delta)?;
            }
            Self::Clear { position } => {
                grid.clear_room(position)?;
            }
            Self::Move { source, offset } => {
                grid.move_block(source, offset)?;
            }
            Self::Show => {}
        }
        Ok(())
    }

    /// Parse one script line with comments already removed
    ///
    /// Returns `Ok(None)` for a blank line.
    fn parse_line(text: &str) -> std::result::Result<Option<Self>, String> {
        let mut tokens = text.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.to_ascii_lowercase().as_str() {
            "grid" => {
                let [width, height] = numbers(&args, GRID_USAGE)?;
                Self::Grid { width, height }
            }
            "set" if args.len() == 3 => {
                let [x, y, room] = numbers(&args, SET_USAGE)?;
                Self::Set {
                    position: Vector2D::new(x, y),
                    room,
                    rotation: DEFAULT_ROTATION,
                }
            }
            "set" => {
                let [x, y, room, rotation] = numbers(&args, SET_USAGE)?;
                Self::Set {
                    position: Vector2D::new(x, y),
                    room,
                    rotation,
                }
            }
            "rotate" => {
                let [x, y, delta] = numbers(&args, ROTATE_USAGE)?;
                Self::Rotate {
                    position: Vector2D::new(x, y),
                    delta,
                }
            }
            "clear" => {
                let [x, y] = numbers(&args, CLEAR_USAGE)?;
                Self::Clear {
                    position: Vector2D::new(x, y),
                }
            }
            "move" => {
                let [left, top, width, height, dx, dy] = numbers(&args, MOVE_USAGE)?;
                Self::Move {
                    source: Rect::new(left, top, width, height),
                    offset: Vector2D::new(dx, dy),
                }
            }
            "show" if args.is_empty() => Self::Show,
            "show" => return Err("`show` takes no arguments".to_string()),
            other => return Err(format!("unknown command `{other}`")),
        };

        Ok(Some(command))
    }
}

/// Parse exactly `N` numeric arguments
fn numbers<T, const N: usize>(args: &[&str], usage: &str) -> std::result::Result<[T; N], String>
where
    T: FromStr + Default + Copy,
    T::Err: Display,
{
    let Ok(tokens) = <[&str; N]>::try_from(args) else {
        return Err(format!(
            "expected `{usage}`, got {} argument(s)",
            args.len()
        ));
    };

    let mut values = [T::default(); N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token
            .parse()
            .map_err(|err| format!("invalid number `{token}`: {err}"))?;
    }
    Ok(values)
}

/// A command together with the script line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number
    pub line: usize,
    /// Parsed command
    pub command: Command,
}

/// Parsed command script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<ScriptLine>,
}

impl Script {
    /// Parse script text
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Script`] for the first malformed line
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split(COMMENT_PREFIX).next().unwrap_or_default();
            if let Some(command) =
                Command::parse_line(content).map_err(|reason| script_error(line, &reason))?
            {
                lines.push(ScriptLine { line, command });
            }
        }

        Ok(Self { lines })
    }

    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::FileSystem`] if the file cannot be read, or
    /// [`MazeError::Script`] if it is malformed
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation: "read script",
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Parsed commands in script order
    pub const fn commands(&self) -> &[ScriptLine] {
        self.lines.as_slice()
    }

    /// Number of commands
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the script contains no commands
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Run the script on a fresh `width x height` grid
    ///
    /// Returns the layouts recorded by `show`, separated by blank lines, or
    /// the final layout if the script never shows.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] for an invalid starting size,
    /// or [`MazeError::Command`] for the first command that fails
    pub fn run(&self, width: usize, height: usize) -> Result<String> {
        self.run_with(width, height, |_| {})
    }

    /// Run the script, reporting the number of executed commands after each one
    ///
    /// # Errors
    ///
    /// Same as [`Script::run`]
    pub fn run_with(
        &self,
        width: usize,
        height: usize,
        mut on_step: impl FnMut(usize),
    ) -> Result<String> {
        let mut grid = MazeGrid::new(width, height)?;
        let mut snapshots = Vec::new();

        for (step, entry) in self.lines.iter().enumerate() {
            entry.command.apply(&mut grid).with_line(entry.line)?;
            if entry.command == Command::Show {
                snapshots.push(render_layout(&grid));
            }
            on_step(step + 1);
        }

        debug!(
            "Script finished: {} commands, {} rooms placed",
            self.lines.len(),
            grid.occupied_count()
        );

        if snapshots.is_empty() {
            snapshots.push(render_layout(&grid));
        }
        Ok(snapshots.join("\n"))
    }
}
