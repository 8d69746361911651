//! Match records and batch summaries.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::game::IllegalMove;

/// How a self-play match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// A player completed five or more in a row.
    Win { player: Player, run_length: usize },
    /// A player proposed an illegal move.
    Forfeit {
        offender: Player,
        reason: IllegalMove,
        at: (i32, i32),
    },
    /// A player had no move to propose.
    Resigned { player: Player },
    /// The board filled up without a winner.
    Exhausted,
    /// The configured move cap was reached first.
    MoveLimit,
}

impl MatchResult {
    /// Winner by five-in-a-row.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchResult::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// One finished self-play match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Match seed (also seeds the agents).
    pub seed: u64,

    /// Legal moves in play order. A forfeiting move is not included.
    pub moves: Vec<(i32, i32)>,

    pub result: MatchResult,

    /// Longest run per player on the final board, indexed by
    /// `Player::index()`.
    pub longest_runs: [usize; 2],
}

impl MatchRecord {
    /// Number of stones played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Longest run `player` reached by the end of the match.
    #[must_use]
    pub fn longest_run(&self, player: Player) -> usize {
        self.longest_runs[player.index()]
    }
}

/// Tally over a batch of matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    /// Five-in-a-row wins, indexed by player.
    pub wins: [usize; 2],
    /// Forfeits, indexed by the offending player.
    pub forfeits: [usize; 2],
    /// Resignations, indexed by the resigning player.
    pub resignations: [usize; 2],
    pub exhausted: usize,
    pub move_limited: usize,
    /// Mean number of stones played per match.
    pub mean_length: f64,
}

impl MatchSummary {
    #[must_use]
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut summary = Self {
            games: records.len(),
            ..Self::default()
        };

        let mut total_moves = 0;
        for record in records {
            total_moves += record.len();
            match record.result {
                MatchResult::Win { player, .. } => summary.wins[player.index()] += 1,
                MatchResult::Forfeit { offender, .. } => summary.forfeits[offender.index()] += 1,
                MatchResult::Resigned { player } => summary.resignations[player.index()] += 1,
                MatchResult::Exhausted => summary.exhausted += 1,
                MatchResult::MoveLimit => summary.move_limited += 1,
            }
        }

        if !records.is_empty() {
            summary.mean_length = total_moves as f64 / records.len() as f64;
        }
        summary
    }

    /// Matches that ended without a five-in-a-row winner.
    #[must_use]
    pub fn undecided(&self) -> usize {
        self.games - self.wins[0] - self.wins[1]
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: A won {}, B won {}, forfeits {}/{}, resigned {}/{}, exhausted {}, move limit {}, mean length {:.1}",
            self.games,
            self.wins[0],
            self.wins[1],
            self.forfeits[0],
            self.forfeits[1],
            self.resignations[0],
            self.resignations[1],
            self.exhausted,
            self.move_limited,
            self.mean_length,
        )
    }
}
