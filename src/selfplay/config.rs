//! Self-play configuration.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, DEFAULT_BOARD_SIZE};
use crate::error::GomokuError;

/// Configuration for a batch of self-play matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Board side length.
    pub board_size: usize,

    /// Maximum moves per match. 0 = play until the board is full.
    pub max_moves: usize,

    /// Seed offset (combined with the match index for unique seeds).
    pub seed_offset: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            max_moves: 0,
            seed_offset: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set maximum moves per match.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Board configuration for each match.
    pub fn board(&self) -> BoardConfig {
        BoardConfig::new(self.board_size)
    }

    /// Seed of the match at `index` in a batch.
    pub fn match_seed(&self, index: usize) -> u64 {
        self.seed_offset.wrapping_add(index as u64)
    }

    /// Effective move cap: `max_moves`, or the cell count when unlimited.
    pub fn move_cap(&self) -> usize {
        let cells = self.board().cell_count();
        if self.max_moves == 0 {
            cells
        } else {
            self.max_moves.min(cells)
        }
    }

    /// Validate the board size.
    pub fn validate(&self) -> Result<(), GomokuError> {
        self.board()
            .validate()
            .map_err(|e| GomokuError::Config(format!("board_size: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_play_config_default() {
        let config = SelfPlayConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.max_moves, 0);
        assert_eq!(config.seed_offset, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SelfPlayConfig::new()
            .with_board_size(9)
            .with_max_moves(40)
            .with_seed_offset(100);

        assert_eq!(config.board(), BoardConfig::new(9));
        assert_eq!(config.max_moves, 40);
        assert_eq!(config.match_seed(3), 103);
    }

    #[test]
    fn test_move_cap() {
        let unlimited = SelfPlayConfig::new().with_board_size(5);
        assert_eq!(unlimited.move_cap(), 25);

        let capped = unlimited.clone().with_max_moves(10);
        assert_eq!(capped.move_cap(), 10);

        let over = unlimited.with_max_moves(1000);
        assert_eq!(over.move_cap(), 25);
    }

    #[test]
    fn test_validate_rejects_zero_board() {
        let err = SelfPlayConfig::new().with_board_size(0).validate().unwrap_err();
        assert!(matches!(err, GomokuError::Config(_)));
        assert!(err.to_string().contains("board_size"));
    }
}
