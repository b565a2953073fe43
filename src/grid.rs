//! Row-major cell storage.

use crate::types::{Pos, Side};

/// Content of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(Side),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Piece(side) => Some(side),
        }
    }
}

/// Fixed-size 2D array of cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    fn idx(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    /// Cell at `pos`, or `None` when `pos` is off the grid.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.idx(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Returns `false`, leaving the grid
    /// untouched, when `pos` is off the grid.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.idx(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Number of cells holding exactly `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.count(Cell::Empty), 12);
        assert_eq!(grid.get(Pos::new(3, 2)), Some(Cell::Empty));
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 3)), None);
        assert_eq!(grid.get(Pos::new(4, 0)), None);
        assert!(!grid.set(Pos::new(0, -1), Cell::Piece(Side::A)));
        assert_eq!(grid.count(Cell::Empty), 12);
    }

    #[test]
    fn test_set_and_count() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set(Pos::new(0, 0), Cell::Piece(Side::A)));
        assert!(grid.set(Pos::new(2, 1), Cell::Piece(Side::B)));
        assert!(grid.set(Pos::new(2, 2), Cell::Piece(Side::B)));
        assert_eq!(grid.count(Cell::Piece(Side::A)), 1);
        assert_eq!(grid.count(Cell::Piece(Side::B)), 2);
        assert_eq!(grid.count(Cell::Empty), 6);
        assert_eq!(grid.row(2), &[Cell::Empty, Cell::Piece(Side::B), Cell::Piece(Side::B)]);
    }
}
