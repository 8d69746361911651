//! # rust-gomoku
//!
//! Gomoku (five-in-a-row) board state and win-detection engine, built to sit
//! inside a self-play training loop.
//!
//! ## Design Principles
//!
//! 1. **Outcomes, not errors**: an illegal move is a
//!    [`MoveOutcome::Illegal`] value that leaves the game untouched, so a
//!    trainer can penalize it and keep going.
//!
//! 2. **One mutation path**: [`GameState::apply_move`] is the only way to
//!    change a game. It places one stone, checks for a win and passes the
//!    turn, all in one call.
//!
//! 3. **Any board size**: boards from 1×1 up to 255×255. Boards smaller than
//!    5×5 are legal; nobody can win on them.
//!
//! ## Architecture
//!
//! - **Full-board line scan**: after each move every row, column and
//!   diagonal long enough to hold five is scanned by one direction-agnostic
//!   routine.
//!
//! - **Independent games**: a `GameState` owns all of its data, so separate
//!   games run on separate threads with nothing shared.
//!
//! ## Modules
//!
//! - `core`: players, cells, board configuration, RNG
//! - `board`: the cell grid and the line scanner
//! - `game`: game state, move outcomes, status
//! - `selfplay`: agent-vs-agent match harness
//! - `error`: construction and parsing errors
//!
//! ## Quick Start
//!
//! ```
//! use rust_gomoku::{GameState, MoveOutcome, Player};
//!
//! let mut game = GameState::new(15);
//! assert_eq!(game.apply_move(7, 7), MoveOutcome::Continue);
//! assert_eq!(game.current_player(), Player::B);
//! assert!(!game.apply_move(7, 7).is_legal());
//! assert_eq!(game.longest_run(Player::A), 1);
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod selfplay;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BoardConfig, Cell, GameRng, Player, MAX_BOARD_SIZE, WIN_LENGTH};

pub use crate::board::{Board, Direction};

pub use crate::error::GomokuError;

pub use crate::game::{GameState, IllegalMove, MoveOutcome, Status};

pub use crate::selfplay::{
    Agent, FirstFreeAgent, RandomAgent,
    MatchRecord, MatchResult, MatchSummary, SelfPlayConfig,
    play_match, play_matches, play_matches_parallel,
};
