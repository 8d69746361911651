//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Board;
use crate::core::{Cell, Player};
use crate::game::{GameState, Status};

/// Numeric cell encoding handed to Python: -1 empty, otherwise the player
/// index.
fn cell_code(cell: Cell) -> i8 {
    match cell.player() {
        None => -1,
        Some(player) => player.index() as i8,
    }
}

pub(crate) fn player_from_index(index: usize) -> PyResult<Player> {
    Player::from_index(index)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 0 or 1, got {}", index)))
}

/// Python wrapper for GameState.
///
/// `move(x, y)` keeps the integer protocol the trainer expects:
/// -1 illegal, 0 continue, 1 win.
#[pyclass(name = "Game")]
#[derive(Clone)]
pub struct PyGame {
    state: GameState,
}

#[pymethods]
impl PyGame {
    /// Create a game on an empty `size` x `size` board.
    #[new]
    #[pyo3(signature = (size = 15))]
    fn new(size: usize) -> PyResult<Self> {
        GameState::try_new(size)
            .map(|state| Self { state })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Resume from a textual board (`.`, `X`, `O`, one row per line).
    #[staticmethod]
    #[pyo3(signature = (text, to_move = 0))]
    fn parse(text: &str, to_move: usize) -> PyResult<Self> {
        let board: Board = text
            .parse()
            .map_err(|e: crate::error::GomokuError| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            state: GameState::from_board(board, player_from_index(to_move)?),
        })
    }

    /// Play the current player's stone at (x, y).
    #[pyo3(name = "move")]
    fn play(&mut self, x: i32, y: i32) -> i8 {
        self.state.apply_move(x, y).code()
    }

    /// Longest run of `player`'s stones in any direction.
    fn longest_run(&self, player: usize) -> PyResult<usize> {
        Ok(self.state.longest_run(player_from_index(player)?))
    }

    /// Empty cells as (x, y) pairs; empty once the game is over.
    fn legal_moves(&self) -> Vec<(i32, i32)> {
        self.state.legal_moves()
    }

    /// Board as a size x size int8 array.
    fn cells<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let n = self.state.size();
        let data: Vec<i8> = self
            .state
            .board()
            .rows()
            .flatten()
            .map(|&cell| cell_code(cell))
            .collect();
        PyArray1::from_vec_bound(py, data).reshape([n, n])
    }

    /// Copy with the players' stones exchanged (pie rule).
    fn swapped(&self) -> Self {
        Self {
            state: self.state.swapped(),
        }
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    #[getter]
    fn size(&self) -> usize {
        self.state.size()
    }

    #[getter]
    fn current_player(&self) -> usize {
        self.state.current_player().index()
    }

    #[getter]
    fn winner(&self) -> Option<usize> {
        self.state.winner().map(Player::index)
    }

    /// Length of the winning run, if the game is over.
    #[getter]
    fn run_length(&self) -> Option<usize> {
        match self.state.status() {
            Status::Finished { run_length, .. } => Some(run_length),
            Status::ToMove(_) => None,
        }
    }

    #[getter]
    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[getter]
    fn is_full(&self) -> bool {
        self.state.is_full()
    }

    fn __str__(&self) -> String {
        self.state.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(size={}, stones={}, status={})",
            self.state.size(),
            self.state.stone_count(),
            self.state.status()
        )
    }
}
