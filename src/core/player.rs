//! Player and cell identifiers.
//!
//! ## Player
//!
//! Gomoku is strictly two-player. `Player::A` moves first and has index 0,
//! `Player::B` has index 1.
//!
//! ## Cell
//!
//! Every board cell is exactly one of `Empty`, `PlayerA` or `PlayerB`.
//! Keeping "empty" as its own variant means a cell can never be confused
//! with a player index.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (index 0).
    A,
    /// Second player (index 1).
    B,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Get the player index (0 for A, 1 for B).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Get the player for an index, if it is 0 or 1.
    ///
    /// ```
    /// use rust_gomoku::core::Player;
    ///
    /// assert_eq!(Player::from_index(0), Some(Player::A));
    /// assert_eq!(Player::from_index(1), Some(Player::B));
    /// assert_eq!(Player::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::A),
            1 => Some(Player::B),
            _ => None,
        }
    }

    /// Get the opponent.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// The stone owner, or `None` for an empty cell.
    #[inline]
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Swap stone colors. Empty stays empty.
    #[inline]
    #[must_use]
    pub const fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::PlayerA => Cell::PlayerB,
            Cell::PlayerB => Cell::PlayerA,
        }
    }

    /// Single-character rendering used by the board text format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerA => 'X',
            Cell::PlayerB => 'O',
        }
    }

    /// Parse a rendering character back into a cell.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::PlayerA),
            'O' | 'o' => Some(Cell::PlayerB),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
