//! Grid constants and runtime configuration defaults

// Cell representation
/// Value stored in both fields of a cell that holds no room
pub const UNSET: i32 = -1;
/// Rotation given to rooms placed without an explicit rotation
pub const DEFAULT_ROTATION: i32 = 0;
/// Degrees in a full turn; rotations wrap into `[0, FULL_TURN_DEGREES)`
pub const FULL_TURN_DEGREES: i32 = 360;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension along either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Grid width used by scripts that do not declare one
pub const DEFAULT_WIDTH: usize = 5;
/// Grid height used by scripts that do not declare one
pub const DEFAULT_HEIGHT: usize = 3;

// Text layout settings
/// Column width of row and column indices
pub const INDEX_FIELD_WIDTH: usize = 2;
/// Column width of the room identifier inside a cell
pub const ROOM_FIELD_WIDTH: usize = 2;
/// Column width of the rotation inside a cell
pub const ROTATION_FIELD_WIDTH: usize = 3;
/// Marker printed in place of the numbers of an unset cell
pub const UNSET_MARKER: &str = "-";

// Script settings
/// File extension of command scripts picked up by the CLI
pub const SCRIPT_EXTENSION: &str = "maze";
/// Start of a comment in a command script
pub const COMMENT_PREFIX: char = '#';

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_layout";
/// Extension of rendered layout files
pub const OUTPUT_EXTENSION: &str = "txt";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
