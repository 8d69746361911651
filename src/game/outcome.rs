//! Move outcomes and game status.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalMove {
    /// Coordinate outside `[0, size)`.
    OutOfBounds,
    /// Target cell already holds a stone.
    Occupied,
    /// The game already has a winner.
    GameOver,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds => write!(f, "out of bounds"),
            IllegalMove::Occupied => write!(f, "cell occupied"),
            IllegalMove::GameOver => write!(f, "game over"),
        }
    }
}

/// Result of [`GameState::apply_move`](super::GameState::apply_move).
///
/// An illegal move is an ordinary value here, not an error: training loops
/// score it instead of aborting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move rejected; the state is unchanged.
    Illegal(IllegalMove),
    /// Stone placed, no winner yet.
    Continue,
    /// Stone placed and it completed a run of `run_length >= 5`.
    Win { player: Player, run_length: usize },
}

impl MoveOutcome {
    /// Was the stone placed?
    #[must_use]
    pub fn is_legal(&self) -> bool {
        !matches!(self, MoveOutcome::Illegal(_))
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Win { .. })
    }

    /// Integer protocol used by the Python trainer: `-1` illegal,
    /// `0` continue, `1` win.
    ///
    /// ```
    /// use rust_gomoku::game::{IllegalMove, MoveOutcome};
    /// use rust_gomoku::core::Player;
    ///
    /// assert_eq!(MoveOutcome::Illegal(IllegalMove::Occupied).code(), -1);
    /// assert_eq!(MoveOutcome::Continue.code(), 0);
    /// assert_eq!(MoveOutcome::Win { player: Player::A, run_length: 5 }.code(), 1);
    /// ```
    #[must_use]
    pub fn code(&self) -> i8 {
        match self {
            MoveOutcome::Illegal(_) => -1,
            MoveOutcome::Continue => 0,
            MoveOutcome::Win { .. } => 1,
        }
    }
}

/// Game state machine.
///
/// `ToMove` loops on itself through legal and illegal moves until a move
/// wins; `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    ToMove(Player),
    Finished { winner: Player, run_length: usize },
}

impl Status {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Finished { .. })
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::ToMove(_) => None,
            Status::Finished { winner, .. } => Some(*winner),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::ToMove(player) => write!(f, "{} to move", player),
            Status::Finished { winner, run_length } => {
                write!(f, "{} wins with {} in a row", winner, run_length)
            }
        }
    }
}
