//! Constants for board geometry, search scoring, and display.
//!
//! These are defaults only. Everything a board or a player needs at runtime
//! is carried by [`GameConfig`](crate::config::GameConfig), which is built
//! from these values and can be overridden per game.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (rows and columns).
pub const DEFAULT_SIZE: usize = 6;

/// Smallest playable number of rows: each side needs a home row.
pub const MIN_ROWS: usize = 2;

/// Row labels are printed two characters wide.
pub const MAX_ROWS: usize = 99;

/// Columns are labelled `a`..`z`, so that is the widest board we can name.
pub const MAX_COLS: usize = 26;

/// Number of rows each side fills in the standard starting position.
pub const HOME_ROWS: usize = 2;

// =============================================================================
// Search Parameters
// =============================================================================

/// Base score of a won position. Remaining depth is added on top, so any
/// win outranks [`DRAW_SCORE`] at every depth.
pub const WIN_SCORE: i32 = 100;

/// Score of a position the fixed-depth search could not resolve.
pub const DRAW_SCORE: i32 = 0;

/// Default minimax depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Deepest search a configuration accepts.
pub const MAX_DEPTH: u32 = 64;

// =============================================================================
// Display
// =============================================================================

/// Glyph for an empty cell.
pub const EMPTY_GLYPH: char = '.';

/// Glyph for a side A piece.
pub const SIDE_A_GLYPH: char = 'W';

/// Glyph for a side B piece.
pub const SIDE_B_GLYPH: char = 'B';
