//! Error types for board setup, play, and layout loading.

use thiserror::Error;

use crate::types::{Move, Pos, Side};

/// Which board invariant an integrity check found broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("position {0} is listed for both sides")]
    SharedPosition(Pos),
    #[error("piece of side {side} at {pos} does not match the grid")]
    CellMismatch { side: Side, pos: Pos },
    #[error("expected {expected} empty cells, found {found}")]
    EmptyCount { expected: usize, found: usize },
}

/// Errors raised by the board engine and its collaborators.
///
/// None of these are recovered internally: the caller decides whether to
/// retry (a human picking another square) or abort (a corrupt layout).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("cell {pos} is already occupied by side {by}")]
    OccupiedCell { pos: Pos, by: Side },

    #[error("position {pos} is outside the {rows}x{cols} board")]
    OutOfBounds { pos: Pos, rows: usize, cols: usize },

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },

    #[error("no moves to undo: history is empty")]
    EmptyHistory,

    #[error("board integrity check failed: {0}")]
    Integrity(#[from] IntegrityViolation),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("bad layout at line {line}: {reason}")]
    BadFormat { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
