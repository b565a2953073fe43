//! Board layout files.
//!
//! A layout is three lines of text:
//!
//! ```text
//! 6 6
//! a1,b1,c2
//! a6,d5
//! ```
//!
//! The first line gives rows and columns, the second lists side A's squares
//! and the third side B's, in algebraic notation. A piece list may be empty.
//! The board is built through [`Board::add_piece`] and must pass the
//! integrity check before it is returned.

use std::fs;
use std::path::Path;

use log::info;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::types::{Pos, Side};

fn bad(line: usize, reason: impl Into<String>) -> GameError {
    GameError::BadFormat {
        line,
        reason: reason.into(),
    }
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), GameError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = fields.as_slice() else {
        return Err(bad(1, "expected 'rows cols'"));
    };
    let rows = rows
        .parse::<usize>()
        .map_err(|_| bad(1, format!("invalid row count: {rows}")))?;
    let cols = cols
        .parse::<usize>()
        .map_err(|_| bad(1, format!("invalid column count: {cols}")))?;
    Ok((rows, cols))
}

fn parse_squares(line: &str, line_no: usize, rows: usize) -> Result<Vec<Pos>, GameError> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Pos::parse_algebraic(s, rows)
                .ok_or_else(|| bad(line_no, format!("malformed square '{s}', expected e.g. 'a1'")))
        })
        .collect()
}

/// Build a board from layout text, using `base` for everything but the size.
pub fn parse_layout_with(text: &str, base: GameConfig) -> Result<Board, GameError> {
    let mut lines = text.lines();
    let dims = lines.next().ok_or_else(|| bad(1, "missing dimensions"))?;
    let (rows, cols) = parse_dimensions(dims)?;

    let config = base.with_size(rows, cols);
    config.validate()?;
    let mut board = Board::with_config(config);

    for (side, line_no) in [(Side::A, 2), (Side::B, 3)] {
        let line = lines
            .next()
            .ok_or_else(|| bad(line_no, format!("missing piece list for side {side}")))?;
        for pos in parse_squares(line, line_no, rows)? {
            board.add_piece(side, pos)?;
        }
    }

    board.verify_integrity()?;
    Ok(board)
}

pub fn parse_layout(text: &str) -> Result<Board, GameError> {
    parse_layout_with(text, GameConfig::default())
}

/// Read and parse a layout file.
pub fn load_layout(path: impl AsRef<Path>, base: GameConfig) -> Result<Board, GameError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let board = parse_layout_with(&text, base)?;
    info!(
        "loaded {}x{} layout from {} ({} vs {} pieces)",
        board.rows(),
        board.cols(),
        path.display(),
        board.piece_count(Side::A),
        board.piece_count(Side::B)
    );
    Ok(board)
}
