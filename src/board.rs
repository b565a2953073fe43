//! Breakthrough board engine.
//!
//! The [`Board`] is the system of record for game state: one [`Grid`], one
//! [`PieceSet`] per side, and the history of applied moves. After setup the
//! state only changes through [`Board::apply`] and [`Board::undo`], and an
//! `undo` right after an `apply` restores the exact previous state, piece
//! order included. The search relies on this to explore the game tree on a
//! single board without cloning it.

use std::fmt;

use log::warn;

use crate::config::GameConfig;
use crate::constants::HOME_ROWS;
use crate::error::{GameError, IntegrityViolation};
use crate::grid::{Cell, Grid};
use crate::pieces::PieceSet;
use crate::types::{Move, Pos, Side};

/// One applied move. `captured` holds the slot the captured piece occupied
/// in the opponent's [`PieceSet`], so undo can put it back in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    captured: Option<usize>,
}

impl HistoryEntry {
    #[inline]
    pub fn captured(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    grid: Grid,
    pieces: [PieceSet; 2],
    history: Vec<HistoryEntry>,
}

impl Board {
    /// Empty board of the given size with default settings otherwise.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_config(GameConfig::default().with_size(rows, cols))
    }

    pub fn with_config(config: GameConfig) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        Self {
            config,
            grid,
            pieces: [PieceSet::new(), PieceSet::new()],
            history: Vec::new(),
        }
    }

    /// Standard opening: side A fills the two bottom rows, side B the two
    /// top rows.
    pub fn standard(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut board = Self::with_config(config);
        let rows = board.rows() as i32;
        let cols = board.cols() as i32;
        let home = (HOME_ROWS as i32).min(rows / 2);
        for i in 0..home {
            for col in 0..cols {
                board.add_piece(Side::A, Pos::new(rows - 1 - i, col))?;
            }
        }
        for i in 0..home {
            for col in 0..cols {
                board.add_piece(Side::B, Pos::new(i, col))?;
            }
        }
        Ok(board)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Cell at `pos`, `None` if off the board.
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.grid.get(pos)
    }

    pub fn pieces(&self, side: Side) -> &PieceSet {
        &self.pieces[side.index()]
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces[side.index()].len()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|e| e.mv)
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    /// Place a piece during setup. Not part of the move API.
    pub fn add_piece(&mut self, side: Side, pos: Pos) -> Result<(), GameError> {
        match self.grid.get(pos) {
            None => Err(GameError::OutOfBounds {
                pos,
                rows: self.rows(),
                cols: self.cols(),
            }),
            Some(Cell::Piece(by)) => Err(GameError::OccupiedCell { pos, by }),
            Some(Cell::Empty) => {
                self.grid.set(pos, Cell::Piece(side));
                self.pieces[side.index()].add(pos);
                Ok(())
            }
        }
    }

    /// Check the grid and piece sets agree. Logs the first violation found.
    pub fn check_integrity(&self) -> bool {
        match self.verify_integrity() {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    /// Like [`Board::check_integrity`], but reports which invariant failed.
    pub fn verify_integrity(&self) -> Result<(), IntegrityViolation> {
        let [a, b] = &self.pieces;
        if let Some(pos) = a.intersection_with(b) {
            return Err(IntegrityViolation::SharedPosition(pos));
        }
        for side in Side::ALL {
            for pos in self.pieces(side).iter() {
                if self.grid.get(pos) != Some(Cell::Piece(side)) {
                    return Err(IntegrityViolation::CellMismatch { side, pos });
                }
            }
        }
        let total = a.len() + b.len();
        let expected = self.grid.len().saturating_sub(total);
        let found = self.grid.count(Cell::Empty);
        if found != expected || total > self.grid.len() {
            return Err(IntegrityViolation::EmptyCount { expected, found });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Move generation
    // -------------------------------------------------------------------------

    pub fn legal_deltas(&self, side: Side) -> [Pos; 3] {
        self.config.legal_deltas(side)
    }

    /// Direction and destination check. Does not look at the source cell.
    ///
    /// Straight moves need an empty destination; diagonal moves need a
    /// destination not held by the mover (empty, or a capture).
    pub fn is_legal_direction(&self, mv: &Move) -> bool {
        let delta = mv.delta();
        if !self.legal_deltas(mv.side).contains(&delta) {
            return false;
        }
        match self.grid.get(mv.dest) {
            None => false,
            Some(dest) if delta.col == 0 => dest.is_empty(),
            Some(dest) => dest != Cell::Piece(mv.side),
        }
    }

    /// Full legality: the source holds the mover's piece and the direction
    /// is legal.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.grid.get(mv.src) == Some(Cell::Piece(mv.side)) && self.is_legal_direction(mv)
    }

    pub fn moves_from(&self, pos: Pos, side: Side) -> Vec<Move> {
        self.legal_deltas(side)
            .into_iter()
            .map(|delta| Move::new(pos, pos + delta, side))
            .filter(|mv| self.grid.contains(mv.dest) && self.is_legal_direction(mv))
            .collect()
    }

    /// Every legal move of `side`, grouped by piece in piece-set order.
    pub fn all_moves(&self, side: Side) -> Vec<Move> {
        self.pieces(side)
            .iter()
            .flat_map(|pos| self.moves_from(pos, side))
            .collect()
    }

    pub fn can_move_from(&self, pos: Pos) -> bool {
        match self.grid.get(pos).and_then(Cell::side) {
            Some(side) => !self.moves_from(pos, side).is_empty(),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Apply / undo
    // -------------------------------------------------------------------------

    pub fn apply(&mut self, mv: Move) -> Result<(), GameError> {
        let side = mv.side;
        let other = side.opponent();

        if self.grid.get(mv.src) != Some(Cell::Piece(side)) {
            return Err(GameError::IllegalMove {
                mv,
                reason: "source cell does not hold the mover's piece",
            });
        }
        if !self.is_legal_direction(&mv) {
            return Err(GameError::IllegalMove {
                mv,
                reason: "not a legal direction for this side",
            });
        }
        if !self.pieces[side.index()].contains(mv.src) {
            return Err(GameError::IllegalMove {
                mv,
                reason: "source is missing from the mover's piece list",
            });
        }

        let captured = if self.grid.get(mv.dest) == Some(Cell::Piece(other)) {
            self.pieces[other.index()].remove(mv.dest)
        } else {
            None
        };

        self.grid.set(mv.src, Cell::Empty);
        self.grid.set(mv.dest, Cell::Piece(side));
        self.pieces[side.index()].relocate(mv.src, mv.dest);
        self.history.push(HistoryEntry { mv, captured });
        Ok(())
    }

    /// Revert the most recent move and return it.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let HistoryEntry { mv, captured } = self.history.pop().ok_or(GameError::EmptyHistory)?;
        let side = mv.side;
        let other = side.opponent();

        self.grid.set(mv.src, Cell::Piece(side));
        self.pieces[side.index()].relocate(mv.dest, mv.src);
        match captured {
            Some(slot) => {
                self.grid.set(mv.dest, Cell::Piece(other));
                self.pieces[other.index()].insert_at(slot, mv.dest);
            }
            None => {
                self.grid.set(mv.dest, Cell::Empty);
            }
        }
        Ok(mv)
    }

    // -------------------------------------------------------------------------
    // Game state
    // -------------------------------------------------------------------------

    /// Winner derived from the last move and the piece counts.
    ///
    /// The mover of the last move wins by reaching its target row. Otherwise
    /// a side with no pieces left loses. With no history only the piece
    /// counts apply.
    pub fn winner(&self) -> Option<Side> {
        if let Some(mv) = self.last_move() {
            if mv.dest.row == self.config.target_row(mv.side) {
                return Some(mv.side);
            }
        }
        Side::ALL
            .into_iter()
            .find(|&side| self.pieces(side).is_empty())
            .map(Side::opponent)
    }

    /// Render the board with `marker` drawn at `pos` instead of its piece.
    pub fn render_with_marker(&self, pos: Option<Pos>, marker: char) -> String {
        let mut out = String::new();
        let labels = self.column_labels();
        let rows = self.rows();
        out.push_str(&labels);
        for r in 0..rows {
            let label = rows - r;
            out.push_str(&format!("{label:<2}"));
            for (c, cell) in self.grid.row(r).iter().enumerate() {
                let here = Pos::new(r as i32, c as i32);
                let ch = if Some(here) == pos {
                    marker
                } else {
                    self.glyph(*cell)
                };
                out.push(ch);
                out.push(' ');
            }
            out.push_str(&format!("{label}\n"));
        }
        out.push_str(&labels);
        out
    }

    fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.config.glyphs.empty,
            Cell::Piece(side) => self.config.glyphs.for_side(side),
        }
    }

    fn column_labels(&self) -> String {
        let mut s = String::from("  ");
        for c in 0..self.cols() {
            s.push((b'a' + c as u8) as char);
            s.push(' ');
        }
        s.push('\n');
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_with_marker(None, ' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    /// 4x4, A at (1,1), B at (0,0) and (0,2).
    fn capture_board() -> Board {
        let mut board = Board::new(4, 4);
        board.add_piece(Side::A, p(1, 1)).unwrap();
        board.add_piece(Side::B, p(0, 0)).unwrap();
        board.add_piece(Side::B, p(0, 2)).unwrap();
        board
    }

    #[test]
    fn test_add_piece_occupied() {
        let mut board = Board::new(4, 4);
        board.add_piece(Side::A, p(0, 0)).unwrap();
        let err = board.add_piece(Side::B, p(0, 0)).unwrap_err();
        assert!(matches!(err, GameError::OccupiedCell { by: Side::A, .. }));
        assert_eq!(board.piece_count(Side::B), 0);
    }

    #[test]
    fn test_add_piece_out_of_bounds() {
        let mut board = Board::new(4, 4);
        let err = board.add_piece(Side::A, p(4, 0)).unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { .. }));
    }

    #[test]
    fn test_moves_from_capture_scenario() {
        let board = capture_board();
        let moves = board.moves_from(p(1, 1), Side::A);
        let dests: Vec<Pos> = moves.iter().map(|m| m.dest).collect();
        assert_eq!(dests, vec![p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(board.cell(p(0, 0)), Some(Cell::Piece(Side::B)));
        assert_eq!(board.cell(p(0, 2)), Some(Cell::Piece(Side::B)));
    }

    #[test]
    fn test_straight_move_blocked() {
        let mut board = capture_board();
        board.add_piece(Side::B, p(0, 1)).unwrap();
        let dests: Vec<Pos> = board
            .moves_from(p(1, 1), Side::A)
            .iter()
            .map(|m| m.dest)
            .collect();
        assert_eq!(dests, vec![p(0, 0), p(0, 2)]);
    }

    #[test]
    fn test_diagonal_onto_own_piece_illegal() {
        let mut board = Board::new(4, 4);
        board.add_piece(Side::A, p(2, 1)).unwrap();
        board.add_piece(Side::A, p(1, 0)).unwrap();
        let mv = Move::new(p(2, 1), p(1, 0), Side::A);
        assert!(!board.is_legal_direction(&mv));
        assert!(board.apply(mv).is_err());
    }

    #[test]
    fn test_moves_from_edge_stay_in_bounds() {
        let mut board = Board::new(4, 4);
        board.add_piece(Side::B, p(1, 0)).unwrap();
        let moves = board.moves_from(p(1, 0), Side::B);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.dest.row == 2 && m.dest.col >= 0));
    }

    #[test]
    fn test_backward_move_illegal() {
        let mut board = Board::new(4, 4);
        board.add_piece(Side::A, p(2, 1)).unwrap();
        let mv = Move::new(p(2, 1), p(3, 1), Side::A);
        let err = board.apply(mv).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
    }

    #[test]
    fn test_apply_wrong_source() {
        let mut board = capture_board();
        let mv = Move::new(p(2, 2), p(1, 2), Side::A);
        assert!(matches!(
            board.apply(mv),
            Err(GameError::IllegalMove { .. })
        ));
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn test_capture_and_undo() {
        let mut board = capture_board();
        let before = board.clone();
        let mv = Move::new(p(1, 1), p(0, 0), Side::A);
        board.apply(mv).unwrap();

        assert!(board.history()[0].captured());
        assert!(!board.pieces(Side::B).contains(p(0, 0)));
        assert!(board.all_moves(Side::B).iter().all(|m| m.src != p(0, 0)));
        assert_eq!(board.piece_count(Side::B), 1);

        assert_eq!(board.undo().unwrap(), mv);
        assert_eq!(board, before);
        assert_eq!(board.pieces(Side::B).as_slice(), &[p(0, 0), p(0, 2)]);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut board = capture_board();
        assert!(matches!(board.undo(), Err(GameError::EmptyHistory)));
    }

    #[test]
    fn test_can_move_from() {
        let mut board = Board::new(3, 3);
        board.add_piece(Side::A, p(1, 1)).unwrap();
        board.add_piece(Side::B, p(0, 1)).unwrap();
        assert!(board.can_move_from(p(1, 1)));
        assert!(!board.can_move_from(p(2, 2)));

        // B at (0,1) is blocked straight ahead by A, but can still go diagonally.
        assert!(board.can_move_from(p(0, 1)));
    }

    #[test]
    fn test_winner_by_target_row() {
        let mut board = Board::new(4, 4);
        board.add_piece(Side::A, p(1, 1)).unwrap();
        board.add_piece(Side::B, p(2, 3)).unwrap();
        assert_eq!(board.winner(), None);
        board.apply(Move::new(p(1, 1), p(0, 1), Side::A)).unwrap();
        assert_eq!(board.winner(), Some(Side::A));
        board.undo().unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_winner_by_elimination() {
        let mut board = Board::new(5, 5);
        board.add_piece(Side::A, p(3, 1)).unwrap();
        board.add_piece(Side::B, p(2, 2)).unwrap();
        board.apply(Move::new(p(3, 1), p(2, 2), Side::A)).unwrap();
        assert_eq!(board.winner(), Some(Side::A));
    }

    #[test]
    fn test_winner_at_setup() {
        let mut board = Board::new(4, 4);
        assert_eq!(board.winner(), Some(Side::B));
        board.add_piece(Side::B, p(0, 0)).unwrap();
        assert_eq!(board.winner(), Some(Side::B));
        board.add_piece(Side::A, p(3, 0)).unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_integrity() {
        let board = Board::standard(GameConfig::default()).unwrap();
        assert!(board.check_integrity());
        assert_eq!(board.piece_count(Side::A), 12);
        assert_eq!(board.piece_count(Side::B), 12);

        let mut broken = board.clone();
        broken.grid.set(p(0, 0), Cell::Empty);
        assert!(!broken.check_integrity());
        assert!(matches!(
            broken.verify_integrity(),
            Err(IntegrityViolation::CellMismatch { side: Side::B, .. })
        ));

        let mut shared = board.clone();
        shared.pieces[Side::A.index()].add(p(0, 0));
        assert_eq!(
            shared.verify_integrity(),
            Err(IntegrityViolation::SharedPosition(p(0, 0)))
        );

        let mut stray = board;
        stray.grid.set(p(2, 2), Cell::Piece(Side::A));
        assert!(matches!(
            stray.verify_integrity(),
            Err(IntegrityViolation::EmptyCount { .. })
        ));
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(3, 2);
        board.add_piece(Side::A, p(2, 0)).unwrap();
        board.add_piece(Side::B, p(0, 1)).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  a b ");
        assert_eq!(lines[1], "3 . B 3");
        assert_eq!(lines[3], "1 W . 1");

        let marked = board.render_with_marker(Some(p(1, 1)), '*');
        assert!(marked.lines().nth(2).unwrap().contains('*'));
    }
}
