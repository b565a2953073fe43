//! Breakthrough-Rust: a Breakthrough board engine with minimax search.
//!
//! Pieces advance one row at a time toward the opponent's edge, moving
//! straight onto empty cells or diagonally onto empty or enemy cells
//! (capturing). Reaching the far row, or eliminating every enemy piece, wins.
//!
//! ## Modules
//!
//! - [`constants`] - Default sizes, scores and glyphs
//! - [`config`] - Immutable per-game configuration
//! - [`types`] - Sides, positions and moves
//! - [`grid`] - 2D cell storage
//! - [`pieces`] - Per-side ordered piece lists
//! - [`board`] - Legality, apply/undo, winner detection, integrity checks
//! - [`search`] - Fixed-depth minimax over apply/undo
//! - [`player`] - Random, greedy and minimax strategies
//! - [`human`] - Line-based human player
//! - [`layout`] - Board layout files
//! - [`game`] - Turn driver
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use breakthrough_rust::board::Board;
//! use breakthrough_rust::config::GameConfig;
//! use breakthrough_rust::search::choose_move;
//! use breakthrough_rust::types::Side;
//!
//! let mut board = Board::standard(GameConfig::default()).unwrap();
//! let mut rng = fastrand::Rng::with_seed(1);
//!
//! // Search three plies ahead for side A, then play the move
//! let mv = choose_move(&mut board, Side::A, 3, &mut rng).unwrap().unwrap();
//! board.apply(mv).unwrap();
//! println!("{board}");
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod grid;
pub mod human;
pub mod layout;
pub mod pieces;
pub mod player;
pub mod search;
pub mod types;
