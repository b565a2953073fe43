//! Value types shared by the board and the search: sides, positions, moves.

use std::fmt;
use std::ops::{Add, Sub};

/// One of the two competing players.
///
/// Side A starts at the bottom edge and moves toward row 0;
/// side B starts at the top edge and moves toward the last row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Index into per-side arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A 2D coordinate. Row 0 is the top edge, col 0 the left edge.
///
/// Also used for relative displacements (move deltas), so components are
/// signed. Ordering is by row, then column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Parse algebraic notation such as `"b3"`.
    ///
    /// The letter is the column (`a` = 0). The number counts rows from the
    /// bottom edge, so `1` is row `rows - 1`. Returns `None` on malformed
    /// input; bounds are the caller's concern.
    pub fn parse_algebraic(s: &str, rows: usize) -> Option<Pos> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next()?.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let number: i32 = chars.as_str().parse().ok()?;
        if number < 1 {
            return None;
        }
        let col = (letter as u8 - b'a') as i32;
        Some(Pos::new(rows as i32 - number, col))
    }

    /// Inverse of [`Pos::parse_algebraic`].
    pub fn to_algebraic(self, rows: usize) -> String {
        let letter = (b'a' + self.col as u8) as char;
        format!("{letter}{}", rows as i32 - self.row)
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, other: Pos) -> Pos {
        Pos::new(self.row - other.row, self.col - other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece of `side` moving from `src` to `dest`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: Pos,
    pub dest: Pos,
    pub side: Side,
}

impl Move {
    #[inline]
    pub fn new(src: Pos, dest: Pos, side: Side) -> Self {
        debug_assert_ne!(src, dest, "a move must change position");
        Self { src, dest, side }
    }

    /// Displacement `dest - src`.
    #[inline]
    pub fn delta(&self) -> Pos {
        self.dest - self.src
    }

    /// The same piece moving back.
    #[inline]
    pub fn inverse(&self) -> Move {
        Move::new(self.dest, self.src, self.side)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} moves from {} to {}>", self.side, self.src, self.dest)
    }
}
