//! Board representation and line scanning.
//!
//! - [`Board`]: the N×N cell grid
//! - [`scan`]: win detection and longest-run measurement over all four
//!   directions

pub mod grid;
pub mod scan;

pub use grid::{Board, Line};
pub use scan::{find_win, line_starts, longest_run, run_length, Direction};
