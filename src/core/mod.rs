//! Core types: players, cells, configuration, RNG.
//!
//! Everything else in the crate is built from these.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{BoardConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
pub use player::{Cell, Player};
pub use rng::GameRng;
