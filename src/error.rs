//! Error types.
//!
//! Illegal moves are not errors: they come back from `GameState::apply_move`
//! as `MoveOutcome::Illegal` so a training loop can score them. The errors
//! here cover construction, configuration and parsing only.

/// Errors raised while building boards, games or configurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GomokuError {
    #[error("invalid board size {size} (must be between 1 and {max})")]
    InvalidSize { size: usize, max: usize },

    #[error("failed to parse board at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("board has {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },

    #[error("config validation error: {0}")]
    Config(String),
}
