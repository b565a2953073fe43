//! Line-based human player.
//!
//! Each turn the player sees the squares that can move (the board itself is
//! drawn by whoever drives the game) and answers with either one square (to list its destinations) or a move
//! such as `b2 b3` / `b2-b3`. Bad input is reported and the prompt repeats.

use std::io::{BufRead, Write};

use log::debug;

use crate::board::Board;
use crate::error::GameError;
use crate::player::Player;
use crate::types::{Move, Pos, Side};

pub struct HumanPlayer<R, W> {
    side: Side,
    input: R,
    output: W,
}

/// What a line of input asked for.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    Inspect(Pos),
    Play(Pos, Pos),
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(side: Side, input: R, output: W) -> Self {
        Self {
            side,
            input,
            output,
        }
    }

    fn parse(line: &str, rows: usize) -> Result<Request, String> {
        let squares: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|s| !s.is_empty())
            .collect();
        let parse = |s: &str| Pos::parse_algebraic(s, rows).ok_or(format!("not a square: {s}"));
        match squares.as_slice() {
            [from] => Ok(Request::Inspect(parse(*from)?)),
            [from, to] => Ok(Request::Play(parse(*from)?, parse(*to)?)),
            _ => Err("enter a square like b2, or a move like b2 b3".to_string()),
        }
    }

    fn squares(board: &Board, positions: impl Iterator<Item = Pos>) -> String {
        positions
            .map(|p| p.to_algebraic(board.rows()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "human"
    }

    fn decide_move(&mut self, board: &mut Board) -> Result<Option<Move>, GameError> {
        let side = self.side;
        if board.all_moves(side).is_empty() {
            return Ok(None);
        }
        let movable = board
            .pieces(side)
            .iter()
            .filter(|&p| board.can_move_from(p))
            .collect::<Vec<_>>();

        loop {
            writeln!(
                self.output,
                "Side {side} to move. Movable: {}",
                Self::squares(board, movable.iter().copied())
            )?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed, side {side} resigns");
                return Ok(None);
            }

            match Self::parse(&line, board.rows()) {
                Err(msg) => writeln!(self.output, "{msg}")?,
                Ok(Request::Inspect(from)) => {
                    let moves = board.moves_from(from, side);
                    if !movable.contains(&from) || moves.is_empty() {
                        writeln!(self.output, "no piece of yours can move from there")?;
                        continue;
                    }
                    write!(self.output, "{}", board.render_with_marker(Some(from), '#'))?;
                    writeln!(
                        self.output,
                        "Destinations: {}",
                        Self::squares(board, moves.iter().map(|m| m.dest))
                    )?;
                }
                Ok(Request::Play(from, to)) => {
                    if from == to {
                        writeln!(self.output, "source and destination are the same")?;
                        continue;
                    }
                    let mv = Move::new(from, to, side);
                    if board.is_legal(&mv) {
                        return Ok(Some(mv));
                    }
                    writeln!(self.output, "illegal move")?;
                }
            }
        }
    }
}
