//! Error types and context management for grid operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::vector::Vector2D;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum MazeError {
    /// Coordinate outside `[0, width) x [0, height)`
    OutOfBounds {
        /// Offending position
        position: Vector2D,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Grid could not be created with the requested size
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Explanation of why the size is rejected
        reason: &'static str,
    },

    /// Integer division by zero
    DivisionByZero {
        /// Name of the operation that divided
        operation: &'static str,
    },

    /// Integer result does not fit in its type
    Overflow {
        /// Name of the operation that overflowed
        operation: &'static str,
    },

    /// Rotation requested on a cell that holds no room
    UnsetRoom {
        /// Position of the empty cell
        position: Vector2D,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Command script line could not be parsed
    Script {
        /// 1-based line number
        line: usize,
        /// Description of what is wrong with the line
        reason: String,
    },

    /// Command script line parsed but failed to execute
    Command {
        /// 1-based line number
        line: usize,
        /// Error raised by the grid
        source: Box<MazeError>,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    position.x, position.y, dimensions.0, dimensions.1
                )
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Cannot create a {width}x{height} grid: {reason}")
            }
            Self::DivisionByZero { operation } => {
                write!(f, "Division by zero in {operation}")
            }
            Self::Overflow { operation } => {
                write!(f, "Integer overflow in {operation}")
            }
            Self::UnsetRoom { position } => {
                write!(
                    f,
                    "No room placed at ({}, {}) to rotate",
                    position.x, position.y
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Script { line, reason } => {
                write!(f, "Script error on line {line}: {reason}")
            }
            Self::Command { line, source } => {
                write!(f, "Command on line {line} failed: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Command { source, .. } => Some(source.as_ref()),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Placeholder path used until a caller supplies the real one
const UNKNOWN_PATH: &str = "<unknown>";

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script line being executed
    pub line: Option<usize>,
    /// File being read or written
    pub path: Option<PathBuf>,
}

/// Enriches errors with script and file information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Attribute the error to a script line
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`MazeError::Command`]
    fn with_line(self, line: usize) -> Result<T>;

    /// Attribute an I/O error to the file or directory it happened on
    ///
    /// # Errors
    ///
    /// Propagates the original error, naming `path` if it had no path yet
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<MazeError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error: MazeError = e.into();
            if let MazeError::FileSystem { path, .. } = &mut error
                && let Some(known) = context.path
                && path.as_os_str() == UNKNOWN_PATH
            {
                *path = known;
            }
            match context.line {
                // Parse errors already carry their line
                Some(line)
                    if !matches!(
                        error,
                        MazeError::Script { .. } | MazeError::Command { .. }
                    ) =>
                {
                    MazeError::Command {
                        line,
                        source: Box::new(error),
                    }
                }
                _ => error,
            }
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })
    }

    fn with_path(self, path: &Path) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for `position` on a grid of `dimensions`
pub const fn out_of_bounds(position: Vector2D, dimensions: (usize, usize)) -> MazeError {
    MazeError::OutOfBounds {
        position,
        dimensions,
    }
}

/// Create a script parse error
pub fn script_error(line: usize, reason: &impl ToString) -> MazeError {
    MazeError::Script {
        line,
        reason: reason.to_string(),
    }
}
