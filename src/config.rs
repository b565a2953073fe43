//! Immutable game configuration.
//!
//! A [`GameConfig`] is built once, validated, and then handed to
//! [`Board::with_config`](crate::board::Board::with_config) and to the
//! players. It replaces any process-wide settings: board size, movement
//! directions, display glyphs and search depth all travel with the board.

use crate::constants::{
    DEFAULT_DEPTH, DEFAULT_SIZE, EMPTY_GLYPH, MAX_COLS, MAX_DEPTH, MAX_ROWS, MIN_ROWS, SIDE_A_GLYPH,
    SIDE_B_GLYPH,
};
use crate::error::GameError;
use crate::types::{Pos, Side};

/// Characters used to draw each kind of cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: char,
    pub side_a: char,
    pub side_b: char,
}

impl Glyphs {
    pub fn for_side(&self, side: Side) -> char {
        match side {
            Side::A => self.side_a,
            Side::B => self.side_b,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: EMPTY_GLYPH,
            side_a: SIDE_A_GLYPH,
            side_b: SIDE_B_GLYPH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Minimax depth in plies.
    pub depth: u32,
    pub glyphs: Glyphs,
    /// Row step of a forward move, indexed by [`Side::index`].
    forward: [i32; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
            glyphs: Glyphs::default(),
            forward: [-1, 1],
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Reject sizes the board cannot represent or label.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows < MIN_ROWS || self.rows > MAX_ROWS {
            return Err(GameError::Config(format!(
                "rows must be between {MIN_ROWS} and {MAX_ROWS}, got {}",
                self.rows
            )));
        }
        if self.cols == 0 || self.cols > MAX_COLS {
            return Err(GameError::Config(format!(
                "columns must be between 1 and {MAX_COLS}, got {}",
                self.cols
            )));
        }
        if self.depth > MAX_DEPTH {
            return Err(GameError::Config(format!(
                "search depth must be at most {MAX_DEPTH}, got {}",
                self.depth
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn forward(&self, side: Side) -> i32 {
        self.forward[side.index()]
    }

    /// The three relative moves open to `side`: forward-left, forward,
    /// forward-right. The two sides' sets mirror each other along the row axis.
    pub fn legal_deltas(&self, side: Side) -> [Pos; 3] {
        let f = self.forward(side);
        [Pos::new(f, -1), Pos::new(f, 0), Pos::new(f, 1)]
    }

    /// The row `side` must reach to win: the opponent's home row.
    pub fn target_row(&self, side: Side) -> i32 {
        if self.forward(side) < 0 {
            0
        } else {
            self.rows as i32 - 1
        }
    }

    /// The edge row `side` starts from.
    pub fn home_row(&self, side: Side) -> i32 {
        self.target_row(side.opponent())
    }
}
