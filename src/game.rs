//! Turn driver.
//!
//! Alternates between the two players, starting with side A, applies each
//! chosen move to the board and polls [`Board::winner`] afterwards. A player
//! that offers no move forfeits and the other side wins.

use log::info;

use crate::board::Board;
use crate::error::GameError;
use crate::player::Player;
use crate::types::{Move, Side};

/// How a finished game was decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A piece reached the far row or the loser ran out of pieces.
    Decided,
    /// The loser had pieces left but no move.
    Forfeit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Side,
    pub outcome: Outcome,
    /// Moves applied during this game.
    pub plies: usize,
}

/// Result of one [`Game::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Played(Move),
    Finished(GameResult),
}

pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    to_move: Side,
    plies: usize,
    result: Option<GameResult>,
}

impl Game {
    /// `players` must be given as `[side A, side B]`.
    pub fn new(board: Board, players: [Box<dyn Player>; 2]) -> Result<Self, GameError> {
        for side in Side::ALL {
            let seat = players[side.index()].side();
            if seat != side {
                return Err(GameError::Config(format!(
                    "player in seat {side} plays side {seat}"
                )));
            }
        }
        board.verify_integrity()?;
        Ok(Self {
            board,
            players,
            to_move: Side::A,
            plies: 0,
            result: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn finish(&mut self, winner: Side, outcome: Outcome) -> Turn {
        let result = GameResult {
            winner,
            outcome,
            plies: self.plies,
        };
        info!(
            "game over after {} plies: side {winner} wins ({outcome:?})",
            self.plies
        );
        self.result = Some(result);
        Turn::Finished(result)
    }

    /// Play one turn, or report the result if the game is already over.
    ///
    /// A move that decides the game is still reported as [`Turn::Played`];
    /// the next call returns [`Turn::Finished`].
    pub fn step(&mut self) -> Result<Turn, GameError> {
        if let Some(result) = self.result {
            return Ok(Turn::Finished(result));
        }
        if let Some(winner) = self.board.winner() {
            return Ok(self.finish(winner, Outcome::Decided));
        }

        let side = self.to_move;
        let player = &mut self.players[side.index()];
        let Some(mv) = player.decide_move(&mut self.board)? else {
            info!("side {side} ({}) has no move and forfeits", player.name());
            return Ok(self.finish(side.opponent(), Outcome::Forfeit));
        };
        if mv.side != side {
            return Err(GameError::IllegalMove {
                mv,
                reason: "played out of turn",
            });
        }

        self.board.apply(mv)?;
        self.plies += 1;
        info!(
            "ply {}: {} {} -> {}",
            self.plies,
            side,
            mv.src.to_algebraic(self.board.rows()),
            mv.dest.to_algebraic(self.board.rows())
        );
        self.to_move = side.opponent();
        Ok(Turn::Played(mv))
    }

    /// Play to the end. `on_move` sees the board after every applied move.
    pub fn run(&mut self, mut on_move: impl FnMut(&Board, Move)) -> Result<GameResult, GameError> {
        loop {
            match self.step()? {
                Turn::Played(mv) => on_move(&self.board, mv),
                Turn::Finished(result) => return Ok(result),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::player::{GreedyPlayer, MinimaxPlayer, RandomPlayer};
    use crate::types::Pos;
    use fastrand::Rng;

    #[test]
    fn test_random_game_terminates() {
        let board = Board::standard(GameConfig::default()).unwrap();
        let players: [Box<dyn Player>; 2] = [
            Box::new(RandomPlayer::new(Side::A, Rng::with_seed(1))),
            Box::new(RandomPlayer::new(Side::B, Rng::with_seed(2))),
        ];
        let mut game = Game::new(board, players).unwrap();
        let mut seen = 0;
        let result = game.run(|_, _| seen += 1).unwrap();
        assert!(result.plies > 0);
        assert_eq!(result.plies, seen);
        if result.outcome == Outcome::Decided {
            assert_eq!(game.board().winner(), Some(result.winner));
        }
        assert_eq!(game.board().history_len(), result.plies);
        assert!(game.board().check_integrity());
    }

    #[test]
    fn test_winning_move_is_reported() {
        let mut board = Board::new(3, 3);
        board.add_piece(Side::A, Pos::new(1, 1)).unwrap();
        board.add_piece(Side::B, Pos::new(2, 2)).unwrap();
        let players: [Box<dyn Player>; 2] = [
            Box::new(MinimaxPlayer::new(Side::A, 1, Rng::with_seed(1))),
            Box::new(RandomPlayer::new(Side::B, Rng::with_seed(2))),
        ];
        let mut game = Game::new(board, players).unwrap();
        let mut seen = Vec::new();
        let result = game
            .run(|board, mv| seen.push((mv, board.winner())))
            .unwrap();
        assert_eq!(result.outcome, Outcome::Decided);
        assert_eq!(result.winner, Side::A);
        assert_eq!(result.plies, 1);
        assert_eq!(seen.len(), 1);
        let (mv, winner) = seen[0];
        assert_eq!(mv.src, Pos::new(1, 1));
        assert_eq!(mv.dest.row, 0);
        assert_eq!(winner, Some(Side::A));
    }

    #[test]
    fn test_forfeit() {
        // A is boxed in on a single column and must forfeit.
        let mut board = Board::new(3, 1);
        board.add_piece(Side::A, Pos::new(2, 0)).unwrap();
        board.add_piece(Side::B, Pos::new(1, 0)).unwrap();
        let players: [Box<dyn Player>; 2] = [
            Box::new(MinimaxPlayer::new(Side::A, 3, Rng::with_seed(1))),
            Box::new(GreedyPlayer::new(Side::B, Rng::with_seed(2))),
        ];
        let mut game = Game::new(board, players).unwrap();
        let result = game.run(|_, _| {}).unwrap();
        assert_eq!(result.winner, Side::B);
        assert_eq!(result.outcome, Outcome::Forfeit);
        assert_eq!(result.plies, 0);
        assert_eq!(game.step().unwrap(), Turn::Finished(result));
    }

    #[test]
    fn test_seats_must_match() {
        let board = Board::standard(GameConfig::default()).unwrap();
        let players: [Box<dyn Player>; 2] = [
            Box::new(RandomPlayer::new(Side::B, Rng::with_seed(1))),
            Box::new(RandomPlayer::new(Side::A, Rng::with_seed(2))),
        ];
        assert!(matches!(Game::new(board, players), Err(GameError::Config(_))));
    }
}
