//! Move-choosing strategies.
//!
//! Every strategy implements [`Player`]. The game driver holds players as
//! `Box<dyn Player>` and asks the one on turn for a move; it applies the
//! move itself. Randomised players own a [`fastrand::Rng`] supplied at
//! construction, so a seeded game replays exactly.

use fastrand::Rng;

use crate::board::Board;
use crate::error::GameError;
use crate::search;
use crate::types::{Move, Pos, Side};

pub trait Player {
    fn side(&self) -> Side;

    fn name(&self) -> &str;

    /// Choose a move for [`Player::side`] without applying it.
    ///
    /// The board is borrowed mutably so search can explore in place; it must
    /// be left exactly as it was. `Ok(None)` means no move is offered, which
    /// the driver treats as a forfeit.
    fn decide_move(&mut self, board: &mut Board) -> Result<Option<Move>, GameError>;
}

/// Plays a uniformly random legal move.
pub struct RandomPlayer {
    side: Side,
    rng: Rng,
}

impl RandomPlayer {
    pub fn new(side: Side, rng: Rng) -> Self {
        Self { side, rng }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "random"
    }

    fn decide_move(&mut self, board: &mut Board) -> Result<Option<Move>, GameError> {
        let moves = board.all_moves(self.side);
        if moves.is_empty() {
            return Ok(None);
        }
        Ok(Some(moves[self.rng.usize(..moves.len())]))
    }
}

/// Advances the piece closest to its target row, choosing randomly among
/// that piece's moves.
pub struct GreedyPlayer {
    side: Side,
    rng: Rng,
}

impl GreedyPlayer {
    pub fn new(side: Side, rng: Rng) -> Self {
        Self { side, rng }
    }

    /// Movable piece nearest the target row; ties go to the smaller column,
    /// then to the earlier piece.
    fn best_piece(&self, board: &Board) -> Option<Pos> {
        let target = board.config().target_row(self.side);
        board
            .pieces(self.side)
            .iter()
            .filter(|&pos| board.can_move_from(pos))
            .min_by_key(|pos| ((pos.row - target).abs(), pos.col))
    }
}

impl Player for GreedyPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "greedy"
    }

    fn decide_move(&mut self, board: &mut Board) -> Result<Option<Move>, GameError> {
        let Some(piece) = self.best_piece(board) else {
            return Ok(None);
        };
        let moves = board.moves_from(piece, self.side);
        if moves.is_empty() {
            return Ok(None);
        }
        Ok(Some(moves[self.rng.usize(..moves.len())]))
    }
}

/// Fixed-depth minimax, see [`search`].
pub struct MinimaxPlayer {
    side: Side,
    depth: u32,
    rng: Rng,
}

impl MinimaxPlayer {
    pub fn new(side: Side, depth: u32, rng: Rng) -> Self {
        Self { side, depth, rng }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Player for MinimaxPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "minimax"
    }

    fn decide_move(&mut self, board: &mut Board) -> Result<Option<Move>, GameError> {
        search::choose_move(board, self.side, self.depth, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn test_random_player_legal() {
        let mut board = Board::standard(GameConfig::default()).unwrap();
        let mut player = RandomPlayer::new(Side::B, Rng::with_seed(5));
        for _ in 0..20 {
            let mv = player.decide_move(&mut board).unwrap().unwrap();
            assert!(board.is_legal(&mv));
            assert_eq!(mv.side, Side::B);
        }
    }

    #[test]
    fn test_greedy_picks_most_advanced_piece() {
        let mut board = Board::new(6, 6);
        board.add_piece(Side::A, p(3, 2)).unwrap();
        board.add_piece(Side::A, p(2, 3)).unwrap();
        board.add_piece(Side::B, p(5, 0)).unwrap();
        let mut player = GreedyPlayer::new(Side::A, Rng::with_seed(1));
        for _ in 0..10 {
            let mv = player.decide_move(&mut board).unwrap().unwrap();
            assert_eq!(mv.src, p(2, 3));
        }
    }

    #[test]
    fn test_greedy_tie_prefers_smaller_column() {
        let mut board = Board::new(6, 6);
        board.add_piece(Side::B, p(2, 4)).unwrap();
        board.add_piece(Side::B, p(2, 1)).unwrap();
        board.add_piece(Side::A, p(5, 5)).unwrap();
        let mut player = GreedyPlayer::new(Side::B, Rng::with_seed(2));
        let mv = player.decide_move(&mut board).unwrap().unwrap();
        assert_eq!(mv.src, p(2, 1));
    }

    #[test]
    fn test_greedy_skips_blocked_piece() {
        // The three pieces nearest the target row cannot move.
        let mut board = Board::new(4, 3);
        board.add_piece(Side::A, p(0, 0)).unwrap();
        board.add_piece(Side::A, p(0, 2)).unwrap();
        board.add_piece(Side::A, p(1, 1)).unwrap();
        board.add_piece(Side::B, p(0, 1)).unwrap();
        board.add_piece(Side::A, p(3, 0)).unwrap();
        assert!(!board.can_move_from(p(1, 1)));
        let mut player = GreedyPlayer::new(Side::A, Rng::with_seed(4));
        for _ in 0..10 {
            let mv = player.decide_move(&mut board).unwrap().unwrap();
            assert_eq!(mv.src, p(3, 0));
        }
    }

    #[test]
    fn test_greedy_without_movable_piece() {
        // A's only piece is boxed in on a single column.
        let mut board = Board::new(4, 1);
        board.add_piece(Side::A, p(2, 0)).unwrap();
        board.add_piece(Side::B, p(1, 0)).unwrap();
        let mut player = GreedyPlayer::new(Side::A, Rng::with_seed(2));
        assert_eq!(player.decide_move(&mut board).unwrap(), None);
    }

    #[test]
    fn test_minimax_player_leaves_board_unchanged() {
        let mut board = Board::standard(GameConfig::default()).unwrap();
        let before = board.clone();
        let mut player = MinimaxPlayer::new(Side::A, 2, Rng::with_seed(9));
        let mv = player.decide_move(&mut board).unwrap().unwrap();
        assert!(board.is_legal(&mv));
        assert_eq!(board, before);
    }
}
