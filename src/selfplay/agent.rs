//! Move-proposing agents.

use crate::core::{GameRng, Player};
use crate::game::GameState;

/// Something that picks moves.
///
/// The runner calls `propose` on whichever agent owns the current turn and
/// applies the answer as-is, so an agent is free to propose illegal moves;
/// the match then ends in a forfeit. Returning `None` resigns.
pub trait Agent {
    fn propose(&mut self, state: &GameState) -> Option<(i32, i32)>;
}

impl<F: FnMut(&GameState) -> Option<(i32, i32)>> Agent for F {
    fn propose(&mut self, state: &GameState) -> Option<(i32, i32)> {
        self(state)
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Agent for one side of the match seeded with `match_seed`.
    pub fn for_match(match_seed: u64, player: Player) -> Self {
        Self {
            rng: GameRng::for_player(match_seed, player),
        }
    }
}

impl Agent for RandomAgent {
    fn propose(&mut self, state: &GameState) -> Option<(i32, i32)> {
        let moves = state.legal_moves();
        self.rng.choose(&moves).copied()
    }
}

/// Plays the first empty cell in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFreeAgent;

impl Agent for FirstFreeAgent {
    fn propose(&mut self, state: &GameState) -> Option<(i32, i32)> {
        state
            .board()
            .empty_cells()
            .next()
            .map(|(x, y)| (x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_proposes_legal_moves() {
        let mut agent = RandomAgent::new(42);
        let mut state = GameState::new(5);

        for _ in 0..10 {
            let (x, y) = agent.propose(&state).unwrap();
            assert!(state.apply_move(x, y).is_legal());
        }
    }

    #[test]
    fn test_random_agent_deterministic() {
        let state = GameState::new(9);
        let mut a1 = RandomAgent::for_match(7, Player::A);
        let mut a2 = RandomAgent::for_match(7, Player::A);

        for _ in 0..5 {
            assert_eq!(a1.propose(&state), a2.propose(&state));
        }
    }

    #[test]
    fn test_random_agent_no_moves_on_full_board() {
        let mut agent = RandomAgent::new(1);
        let mut state = GameState::new(2);
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            state.apply_move(x, y);
        }
        assert!(state.is_full());
        assert_eq!(agent.propose(&state), None);
    }

    #[test]
    fn test_first_free_agent() {
        let mut state = GameState::new(3);
        state.apply_move(0, 0);
        assert_eq!(FirstFreeAgent.propose(&state), Some((0, 1)));
    }

    #[test]
    fn test_closure_agent() {
        let mut corner = |_: &GameState| Some((0, 0));
        let state = GameState::new(5);
        assert_eq!(corner.propose(&state), Some((0, 0)));
    }
}
