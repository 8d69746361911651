//! Game state and move application.
//!
//! [`GameState::apply_move`] is the only way to change a game. It returns a
//! [`MoveOutcome`]: `Illegal`, `Continue`, or `Win { player, run_length }`.

pub mod outcome;
pub mod state;

pub use outcome::{IllegalMove, MoveOutcome, Status};
pub use state::GameState;
