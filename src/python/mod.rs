//! Python bindings for the rust-gomoku engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_gomoku as gomoku
//!
//! game = gomoku.Game(size=15)
//! assert game.move(7, 7) == 0       # legal, game continues
//! assert game.move(7, 7) == -1      # occupied
//! board = game.cells()              # (15, 15) int8, -1 = empty
//!
//! config = gomoku.SelfPlayConfig(board_size=9, seed_offset=100)
//! records = gomoku.play_random_matches(config, 64)
//! print(gomoku.summarize(records))
//! ```

use pyo3::prelude::*;

mod py_game;
mod py_self_play;

pub use py_game::*;
pub use py_self_play::*;

/// rust-gomoku: Gomoku board state and win detection for self-play training.
#[pymodule]
fn rust_gomoku(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("WIN_LENGTH", crate::core::WIN_LENGTH)?;

    m.add_class::<PyGame>()?;

    // Self-play
    m.add_class::<PySelfPlayConfig>()?;
    m.add_class::<PyMatchRecord>()?;
    m.add_function(wrap_pyfunction!(play_random_matches, m)?)?;
    m.add_function(wrap_pyfunction!(summarize, m)?)?;

    Ok(())
}
