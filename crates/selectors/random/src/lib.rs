//! Uniform random move selector.
//!
//! No evaluation at all: picks uniformly from the allowed root moves.
//! Useful as a baseline opponent and for stress-testing the plumbing
//! around move selection.

use cozy_chess::Board;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use selection_core::{candidate_moves, Constraints, MoveSelector, SelectError, Selection};


/// Selects a random legal move.
///
/// Each selector owns its generator, so a fixed seed pins down the whole
/// choice sequence for tests.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed variant for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select(
        &mut self,
        board: &Board,
        constraints: &Constraints,
    ) -> Result<Selection, SelectError> {
        let moves = candidate_moves(board, constraints)?;
        let mv = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(SelectError::NoLegalMoves)?;
        Ok(Selection::of(mv))
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
