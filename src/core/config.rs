//! Board configuration.
//!
//! The only structural parameter of a Gomoku game is the board size. The win
//! length is fixed at five.

use serde::{Deserialize, Serialize};

use crate::error::GomokuError;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Largest supported board side.
pub const MAX_BOARD_SIZE: usize = 255;

/// Standard Gomoku board side.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Board configuration.
///
/// ```
/// use rust_gomoku::core::BoardConfig;
///
/// let config = BoardConfig::new(19);
/// assert_eq!(config.size, 19);
/// assert!(config.validate().is_ok());
/// assert!(BoardConfig::new(0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Side length N of the N×N grid.
    pub size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardConfig {
    /// Create a configuration for an N×N board.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Check the size is in `1..=MAX_BOARD_SIZE`.
    ///
    /// Sizes below `WIN_LENGTH` are valid; such boards just never produce a
    /// winner.
    pub fn validate(&self) -> Result<(), GomokuError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(GomokuError::InvalidSize {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }

    /// Can a five-in-a-row fit on this board at all?
    #[must_use]
    pub const fn can_win(&self) -> bool {
        self.size >= WIN_LENGTH
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }
}
