//! Match loop: alternate agents on one `GameState` until the game ends.
//!
//! Matches share nothing, so a batch runs just as well on the rayon pool as
//! sequentially. Each match's agents are built from its seed, which makes a
//! parallel batch produce exactly the records of a sequential one.

use log::{debug, trace, warn};
use rayon::prelude::*;

use super::agent::Agent;
use super::config::SelfPlayConfig;
use super::record::{MatchRecord, MatchResult};
use crate::core::Player;
use crate::error::GomokuError;
use crate::game::{GameState, MoveOutcome};

/// Play one match, Player A (`agent_a`) moving first.
pub fn play_match<A: Agent, B: Agent>(
    config: &SelfPlayConfig,
    agent_a: &mut A,
    agent_b: &mut B,
    seed: u64,
) -> Result<MatchRecord, GomokuError> {
    let mut state = GameState::from_config(&config.board())?;
    let cap = config.move_cap();
    let mut moves = Vec::new();

    let result = loop {
        if state.is_full() {
            break MatchResult::Exhausted;
        }
        if moves.len() >= cap {
            break MatchResult::MoveLimit;
        }

        let mover = state.current_player();
        let proposal = match mover {
            Player::A => agent_a.propose(&state),
            Player::B => agent_b.propose(&state),
        };
        let Some((x, y)) = proposal else {
            break MatchResult::Resigned { player: mover };
        };

        match state.apply_move(x, y) {
            MoveOutcome::Illegal(reason) => {
                warn!("match {}: {} proposed ({}, {}): {}", seed, mover, x, y, reason);
                break MatchResult::Forfeit {
                    offender: mover,
                    reason,
                    at: (x, y),
                };
            }
            MoveOutcome::Continue => {
                trace!("match {}: {} plays ({}, {})", seed, mover, x, y);
                moves.push((x, y));
            }
            MoveOutcome::Win { player, run_length } => {
                moves.push((x, y));
                break MatchResult::Win { player, run_length };
            }
        }
    };

    let record = MatchRecord {
        seed,
        moves,
        result,
        longest_runs: [state.longest_run(Player::A), state.longest_run(Player::B)],
    };
    debug!(
        "match {} finished after {} moves: {:?}",
        seed,
        record.len(),
        record.result
    );
    Ok(record)
}

/// Play `count` matches one after another.
///
/// Match `i` uses seed `config.match_seed(i)`; the agent factories get that
/// seed too.
pub fn play_matches<A, B>(
    config: &SelfPlayConfig,
    make_a: impl Fn(u64) -> A,
    make_b: impl Fn(u64) -> B,
    count: usize,
) -> Result<Vec<MatchRecord>, GomokuError>
where
    A: Agent,
    B: Agent,
{
    config.validate()?;
    (0..count)
        .map(|i| {
            let seed = config.match_seed(i);
            play_match(config, &mut make_a(seed), &mut make_b(seed), seed)
        })
        .collect()
}

/// Same as [`play_matches`], spread over the rayon thread pool.
///
/// Records come back in match-index order.
pub fn play_matches_parallel<A, B>(
    config: &SelfPlayConfig,
    make_a: impl Fn(u64) -> A + Sync,
    make_b: impl Fn(u64) -> B + Sync,
    count: usize,
) -> Result<Vec<MatchRecord>, GomokuError>
where
    A: Agent,
    B: Agent,
{
    config.validate()?;
    (0..count)
        .into_par_iter()
        .map(|i| {
            let seed = config.match_seed(i);
            play_match(config, &mut make_a(seed), &mut make_b(seed), seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::IllegalMove;
    use crate::selfplay::agent::{FirstFreeAgent, RandomAgent};

    #[test]
    fn test_play_match_random() {
        let config = SelfPlayConfig::new().with_board_size(9);
        let mut a = RandomAgent::for_match(42, Player::A);
        let mut b = RandomAgent::for_match(42, Player::B);

        let record = play_match(&config, &mut a, &mut b, 42).unwrap();
        assert_eq!(record.seed, 42);
        assert!(!record.is_empty());
        assert!(matches!(
            record.result,
            MatchResult::Win { .. } | MatchResult::Exhausted
        ));
        if let MatchResult::Win { player, run_length } = record.result {
            assert!(run_length >= 5);
            assert!(record.longest_run(player) >= run_length);
        }
    }

    #[test]
    fn test_first_free_agents_fill_rows() {
        // Filling a 5x5 board row-major alternates stones along rows and
        // columns, but both long diagonals go to A. The ascending one is
        // completed first, by the stone at (4, 0).
        let config = SelfPlayConfig::new().with_board_size(5);
        let record = play_match(&config, &mut FirstFreeAgent, &mut FirstFreeAgent, 0).unwrap();

        assert_eq!(record.moves[0], (0, 0));
        assert_eq!(record.moves[1], (0, 1));
        assert_eq!(record.len(), 21);
        assert_eq!(record.moves.last(), Some(&(4, 0)));
        assert_eq!(
            record.result,
            MatchResult::Win {
                player: Player::A,
                run_length: 5
            }
        );
    }

    #[test]
    fn test_forfeit_on_illegal_move() {
        let config = SelfPlayConfig::new().with_board_size(5);
        let mut a = |_: &GameState| Some((2, 2));
        let mut b = |_: &GameState| Some((2, 2));

        let record = play_match(&config, &mut a, &mut b, 0).unwrap();
        assert_eq!(record.moves, vec![(2, 2)]);
        assert_eq!(
            record.result,
            MatchResult::Forfeit {
                offender: Player::B,
                reason: IllegalMove::Occupied,
                at: (2, 2)
            }
        );
        assert_eq!(record.longest_runs, [1, 0]);
    }

    #[test]
    fn test_resign() {
        let config = SelfPlayConfig::new().with_board_size(5);
        let mut a = |_: &GameState| -> Option<(i32, i32)> { None };
        let mut b = FirstFreeAgent;

        let record = play_match(&config, &mut a, &mut b, 0).unwrap();
        assert!(record.is_empty());
        assert_eq!(record.result, MatchResult::Resigned { player: Player::A });
    }

    #[test]
    fn test_move_limit() {
        let config = SelfPlayConfig::new().with_board_size(9).with_max_moves(4);
        let record = play_match(&config, &mut FirstFreeAgent, &mut FirstFreeAgent, 0).unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(record.result, MatchResult::MoveLimit);
    }

    #[test]
    fn test_small_board_exhausts() {
        let config = SelfPlayConfig::new().with_board_size(4);
        let record = play_match(&config, &mut FirstFreeAgent, &mut FirstFreeAgent, 0).unwrap();
        assert_eq!(record.len(), 16);
        assert_eq!(record.result, MatchResult::Exhausted);
    }

    #[test]
    fn test_invalid_board_size() {
        let config = SelfPlayConfig::new().with_board_size(0);
        assert!(play_match(&config, &mut FirstFreeAgent, &mut FirstFreeAgent, 0).is_err());
        assert!(play_matches(&config, |_| FirstFreeAgent, |_| FirstFreeAgent, 3).is_err());
    }

    #[test]
    fn test_play_matches_seeds() {
        let config = SelfPlayConfig::new().with_board_size(7).with_seed_offset(10);
        let records = play_matches(
            &config,
            |seed| RandomAgent::for_match(seed, Player::A),
            |seed| RandomAgent::for_match(seed, Player::B),
            3,
        )
        .unwrap();

        let seeds: Vec<_> = records.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![10, 11, 12]);
    }
}
