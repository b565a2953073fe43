//! Fixed-depth minimax search.
//!
//! The search explores the game tree on the caller's [`Board`] in place:
//! every candidate move is applied, searched and undone before the next
//! sibling is tried, so the board comes back unchanged, history included.
//! There is no pruning and no evaluation heuristic. Leaves at depth zero
//! score as draws, decided positions score as wins or losses adjusted by
//! the remaining depth so that faster wins and slower losses are preferred.
//!
//! Moves that tie for the best score are collected and one is picked at
//! random with the injected [`fastrand::Rng`].

use fastrand::Rng;
use log::debug;

use crate::board::Board;
use crate::constants::{DRAW_SCORE, WIN_SCORE};
use crate::error::GameError;
use crate::types::{Move, Side};

/// Outcome of a search from the root position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move, `None` when the root is decided or the side to move is stuck.
    pub mv: Option<Move>,
    /// Score from the searching side's point of view.
    pub score: i32,
    /// Number of positions visited.
    pub nodes: u64,
    /// Number of root moves sharing the best score.
    pub ties: usize,
}

/// State for one search call.
pub struct Searcher<'a> {
    side: Side,
    rng: &'a mut Rng,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(side: Side, rng: &'a mut Rng) -> Self {
        Self { side, rng, nodes: 0 }
    }

    /// Score of a decided position, from the searching side's point of view.
    fn decided(&self, winner: Side, depth: u32) -> i32 {
        let score = WIN_SCORE.saturating_add(i32::try_from(depth).unwrap_or(i32::MAX));
        if winner == self.side { score } else { -score }
    }

    /// Returns `(move, score, ties)` for the node at `board`.
    ///
    /// Errors from `apply`/`undo` mean the board and its history no longer
    /// agree; they are propagated untouched.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
    ) -> Result<(Option<Move>, i32, usize), GameError> {
        self.nodes += 1;

        if let Some(winner) = board.winner() {
            return Ok((None, self.decided(winner, depth), 0));
        }
        if depth == 0 {
            return Ok((None, DRAW_SCORE, 0));
        }

        let current = if maximizing {
            self.side
        } else {
            self.side.opponent()
        };
        let moves = board.all_moves(current);
        if moves.is_empty() {
            // Forfeit: the side to move is stuck and loses.
            return Ok((None, self.decided(current.opponent(), depth), 0));
        }

        let mut best: Option<i32> = None;
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in moves {
            board.apply(mv)?;
            let result = self.minimax(board, depth - 1, !maximizing);
            board.undo()?;
            let (_, score, _) = result?;

            match best {
                Some(b) if score == b => best_moves.push(mv),
                Some(b) if (maximizing && score < b) || (!maximizing && score > b) => {}
                _ => {
                    best = Some(score);
                    best_moves.clear();
                    best_moves.push(mv);
                }
            }
        }

        let ties = best_moves.len();
        let chosen = match best_moves.len() {
            0 => None,
            1 => Some(best_moves[0]),
            n => Some(best_moves[self.rng.usize(..n)]),
        };
        Ok((chosen, best.unwrap_or(DRAW_SCORE), ties))
    }
}

/// Search `depth` plies ahead for `side` and report the chosen move with
/// its score and search statistics.
pub fn search(
    board: &mut Board,
    side: Side,
    depth: u32,
    rng: &mut Rng,
) -> Result<SearchResult, GameError> {
    let mut searcher = Searcher::new(side, rng);
    let (mv, score, ties) = searcher.minimax(board, depth, true)?;
    debug!(
        "search side={side} depth={depth} nodes={} score={score} ties={ties} move={}",
        searcher.nodes,
        mv.map(|m| m.to_string()).unwrap_or_else(|| "none".into())
    );
    Ok(SearchResult {
        mv,
        score,
        nodes: searcher.nodes,
        ties,
    })
}

/// Pick a move for `side`. `None` means `side` has no legal move at the
/// root (or the game is already decided); the caller resolves that through
/// normal winner detection.
pub fn choose_move(
    board: &mut Board,
    side: Side,
    depth: u32,
    rng: &mut Rng,
) -> Result<Option<Move>, GameError> {
    Ok(search(board, side, depth, rng)?.mv)
}
