//! Game state: one board plus whose turn it is.
//!
//! ## Invariants
//!
//! - The board only changes inside [`GameState::apply_move`], which places
//!   exactly one stone and flips the turn exactly once.
//! - An illegal move changes nothing.
//! - Once a move wins, the state is finished and rejects every further move.

use serde::{Deserialize, Serialize};

use super::outcome::{IllegalMove, MoveOutcome, Status};
use crate::board::{scan, Board};
use crate::core::{BoardConfig, Cell, Player};
use crate::error::GomokuError;

/// Winner and run length of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct Finish {
    winner: Player,
    run_length: usize,
}

/// A Gomoku game in progress.
///
/// ```
/// use rust_gomoku::{GameState, MoveOutcome, Player};
///
/// let mut game = GameState::new(5);
/// for i in 0..4 {
///     assert_eq!(game.apply_move(i, i), MoveOutcome::Continue);
///     assert_eq!(game.apply_move(i, 4), MoveOutcome::Continue);
/// }
/// assert_eq!(
///     game.apply_move(4, 4),
///     MoveOutcome::Win { player: Player::A, run_length: 5 }
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    finish: Option<Finish>,
}

impl GameState {
    /// Create a game on an empty N×N board with Player A to move.
    ///
    /// Boards smaller than 5 are allowed; nobody can win on them.
    ///
    /// # Panics
    ///
    /// If `size` is 0 or larger than [`MAX_BOARD_SIZE`](crate::core::MAX_BOARD_SIZE).
    /// Use [`GameState::try_new`] to get an error instead.
    #[must_use]
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(state) => state,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a game, rejecting invalid sizes.
    pub fn try_new(size: usize) -> Result<Self, GomokuError> {
        Self::from_config(&BoardConfig::new(size))
    }

    /// Create a game from a board configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self, GomokuError> {
        config.validate()?;
        Ok(Self {
            board: Board::empty(config.size),
            turn: Player::A,
            finish: None,
        })
    }

    /// Resume from an existing position with `to_move` on turn.
    ///
    /// If the position already contains a five, the game comes back
    /// finished. The player who moved last (`to_move.other()`) is checked
    /// first.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let finish = [to_move.other(), to_move].into_iter().find_map(|player| {
            scan::find_win(&board, player).map(|run_length| Finish {
                winner: player,
                run_length,
            })
        });

        Self {
            board,
            turn: to_move,
            finish,
        }
    }

    /// Place the current player's stone at `(x, y)`.
    ///
    /// On a legal move the stone is placed, the board is checked for a win
    /// by the mover, and the turn passes to the other player, whether or not
    /// the move won. On an illegal move nothing changes.
    pub fn apply_move(&mut self, x: i32, y: i32) -> MoveOutcome {
        if self.finish.is_some() {
            return MoveOutcome::Illegal(IllegalMove::GameOver);
        }
        match self.board.cell(x, y) {
            None => return MoveOutcome::Illegal(IllegalMove::OutOfBounds),
            Some(cell) if !cell.is_empty() => return MoveOutcome::Illegal(IllegalMove::Occupied),
            Some(_) => {}
        }

        let mover = self.turn;
        self.board.set(x as usize, y as usize, Cell::from(mover));
        let win = scan::find_win(&self.board, mover);
        self.turn = mover.other();

        match win {
            Some(run_length) => {
                self.finish = Some(Finish {
                    winner: mover,
                    run_length,
                });
                MoveOutcome::Win {
                    player: mover,
                    run_length,
                }
            }
            None => MoveOutcome::Continue,
        }
    }

    /// Apply a move to a copy, leaving `self` untouched.
    #[must_use]
    pub fn after_move(&self, x: i32, y: i32) -> (GameState, MoveOutcome) {
        let mut next = self.clone();
        let outcome = next.apply_move(x, y);
        (next, outcome)
    }

    /// Longest run of `player`'s stones in any direction.
    ///
    /// Used as a partial-credit signal when nobody reaches five. 0 on an
    /// empty board.
    #[must_use]
    pub fn longest_run(&self, player: Player) -> usize {
        scan::longest_run(&self.board, player)
    }

    /// Every empty cell, row-major. Empty once the game is finished.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(i32, i32)> {
        if self.finish.is_some() {
            return Vec::new();
        }
        self.board
            .empty_cells()
            .map(|(x, y)| (x as i32, y as i32))
            .collect()
    }

    /// Copy with both players' stones exchanged (pie rule).
    ///
    /// The turn stays with the same player; a recorded winner is swapped
    /// along with the stones.
    #[must_use]
    pub fn swapped(&self) -> GameState {
        Self {
            board: self.board.swapped(),
            turn: self.turn,
            finish: self.finish.map(|finish| Finish {
                winner: finish.winner.other(),
                ..finish
            }),
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self.finish {
            None => Status::ToMove(self.turn),
            Some(Finish { winner, run_length }) => Status::Finished { winner, run_length },
        }
    }

    /// Player whose turn it is. Keeps flipping through the winning move, so
    /// after a win this is the loser.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.finish.map(|finish| finish.winner)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `(x, y)`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.board.cell(x, y)
    }

    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.board.stone_count()
    }

    /// No empty cell left. The engine does not end the game on this; the
    /// caller decides what a full board means.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "{}", self.status())
    }
}
