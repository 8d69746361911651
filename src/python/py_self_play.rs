//! Self-play bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Player;
use crate::selfplay::{
    play_matches, play_matches_parallel, MatchRecord, MatchResult, MatchSummary, RandomAgent,
    SelfPlayConfig,
};

/// Python wrapper for SelfPlayConfig.
#[pyclass(name = "SelfPlayConfig")]
#[derive(Clone)]
pub struct PySelfPlayConfig(pub SelfPlayConfig);

#[pymethods]
impl PySelfPlayConfig {
    /// Create a new self-play configuration.
    ///
    /// # Arguments
    /// - board_size: Board side length (default: 15)
    /// - max_moves: Move cap per match, 0 for none (default: 0)
    /// - seed_offset: Seed of the first match (default: 0)
    #[new]
    #[pyo3(signature = (board_size = 15, max_moves = 0, seed_offset = 0))]
    fn new(board_size: usize, max_moves: usize, seed_offset: u64) -> PyResult<Self> {
        let config = SelfPlayConfig::default()
            .with_board_size(board_size)
            .with_max_moves(max_moves)
            .with_seed_offset(seed_offset);
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self(config))
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.0.board_size
    }

    #[getter]
    fn max_moves(&self) -> usize {
        self.0.max_moves
    }

    #[getter]
    fn seed_offset(&self) -> u64 {
        self.0.seed_offset
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlayConfig(board_size={}, max_moves={}, seed_offset={})",
            self.0.board_size, self.0.max_moves, self.0.seed_offset
        )
    }
}

/// Python wrapper for MatchRecord.
#[pyclass(name = "MatchRecord")]
#[derive(Clone)]
pub struct PyMatchRecord(pub MatchRecord);

#[pymethods]
impl PyMatchRecord {
    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn moves(&self) -> Vec<(i32, i32)> {
        self.0.moves.clone()
    }

    /// "win", "forfeit", "resigned", "exhausted" or "move_limit".
    #[getter]
    fn result(&self) -> &'static str {
        match self.0.result {
            MatchResult::Win { .. } => "win",
            MatchResult::Forfeit { .. } => "forfeit",
            MatchResult::Resigned { .. } => "resigned",
            MatchResult::Exhausted => "exhausted",
            MatchResult::MoveLimit => "move_limit",
        }
    }

    #[getter]
    fn winner(&self) -> Option<usize> {
        self.0.result.winner().map(Player::index)
    }

    #[getter]
    fn longest_runs(&self) -> (usize, usize) {
        (self.0.longest_runs[0], self.0.longest_runs[1])
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchRecord(seed={}, moves={}, result={:?})",
            self.0.seed,
            self.0.len(),
            self.0.result
        )
    }
}

/// Play `count` random-vs-random matches and return their records.
#[pyfunction]
#[pyo3(signature = (config, count, parallel = true))]
pub fn play_random_matches(
    py: Python<'_>,
    config: &PySelfPlayConfig,
    count: usize,
    parallel: bool,
) -> PyResult<Vec<PyMatchRecord>> {
    let config = config.0.clone();
    let records = py.allow_threads(move || {
        let make_a = |seed| RandomAgent::for_match(seed, Player::A);
        let make_b = |seed| RandomAgent::for_match(seed, Player::B);
        if parallel {
            play_matches_parallel(&config, make_a, make_b, count)
        } else {
            play_matches(&config, make_a, make_b, count)
        }
    });
    records
        .map(|records| records.into_iter().map(PyMatchRecord).collect())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// One-line tally of a batch of records.
#[pyfunction]
pub fn summarize(records: Vec<PyRef<'_, PyMatchRecord>>) -> String {
    let records: Vec<MatchRecord> = records.iter().map(|r| r.0.clone()).collect();
    MatchSummary::from_records(&records).to_string()
}
