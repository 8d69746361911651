//! Self-play harness.
//!
//! Two [`Agent`]s alternate moves on a fresh [`GameState`](crate::GameState)
//! until one completes five in a row, one proposes an illegal move, the
//! board fills up, or the move cap is hit. Each match produces a
//! [`MatchRecord`] carrying the result and both players' longest runs, the
//! partial-credit signal a trainer can score with.
//!
//! ## Usage
//!
//! ```
//! use rust_gomoku::core::Player;
//! use rust_gomoku::selfplay::{play_matches_parallel, MatchSummary, RandomAgent, SelfPlayConfig};
//!
//! let config = SelfPlayConfig::default()
//!     .with_board_size(9)
//!     .with_seed_offset(1000);
//!
//! let records = play_matches_parallel(
//!     &config,
//!     |seed| RandomAgent::for_match(seed, Player::A),
//!     |seed| RandomAgent::for_match(seed, Player::B),
//!     8,
//! )
//! .unwrap();
//!
//! let summary = MatchSummary::from_records(&records);
//! assert_eq!(summary.games, 8);
//! ```

pub mod agent;
pub mod config;
pub mod record;
pub mod runner;

pub use agent::{Agent, FirstFreeAgent, RandomAgent};
pub use config::SelfPlayConfig;
pub use record::{MatchRecord, MatchResult, MatchSummary};
pub use runner::{play_match, play_matches, play_matches_parallel};
