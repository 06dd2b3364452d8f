//! Clock-driven composite selector.
//!
//! Derives a time budget for the side to move, then picks how to pick:
//! with a comfortable clock it plays a random candidate, under pressure it
//! falls back to the cheapest deterministic policy, the long-form minimum.
//! A draw offer is answered with whatever the host flagged; this selector
//! has no draw judgement of its own.

use cozy_chess::Board;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use selection_core::{
    candidate_moves, long_form, Constraints, MoveSelector, SelectError, Selection, TimeBudget,
};
use tracing::debug;


/// Switches selection policy on the clock.
#[derive(Debug, Clone)]
pub struct ClockSelector {
    rng: StdRng,
}

impl ClockSelector {
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

impl Default for ClockSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for ClockSelector {
    fn select(
        &mut self,
        board: &Board,
        constraints: &Constraints,
    ) -> Result<Selection, SelectError> {
        let moves = candidate_moves(board, constraints)?;
        let budget = TimeBudget::for_side(&constraints.clock, board.side_to_move());

        let mv = if budget.is_generous() {
            debug!(
                remaining = budget.remaining,
                increment = budget.increment,
                "clock is generous, choosing at random"
            );
            moves
                .choose(&mut self.rng)
                .copied()
                .ok_or(SelectError::NoLegalMoves)?
        } else {
            debug!(
                remaining = budget.remaining,
                increment = budget.increment,
                "short on time, taking the first coordinate move"
            );
            moves
                .into_iter()
                .min_by_key(|&mv| long_form(mv))
                .ok_or(SelectError::NoLegalMoves)?
        };

        Ok(Selection {
            mv,
            score: None,
            accept_draw: Some(constraints.draw_offered),
        })
    }

    fn name(&self) -> &str {
        "Combo v1.0"
    }
}
