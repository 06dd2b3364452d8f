//! Deterministic move selectors keyed on notation order.
//!
//! Two orderings: short algebraic and long coordinate form. Sorting move
//! text is an arbitrary but stable policy, which makes these selectors
//! handy as reproducible opponents in regression tests.

use cozy_chess::Board;
use selection_core::{
    candidate_moves, long_form, short_form, Constraints, MoveSelector, SelectError, Selection,
};


/// Plays the first candidate in short algebraic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SanSelector;

impl MoveSelector for SanSelector {
    fn select(
        &mut self,
        board: &Board,
        constraints: &Constraints,
    ) -> Result<Selection, SelectError> {
        let moves = candidate_moves(board, constraints)?;
        let mv = moves
            .into_iter()
            .min_by_key(|&mv| short_form(board, mv))
            .ok_or(SelectError::NoLegalMoves)?;
        Ok(Selection::of(mv))
    }

    fn name(&self) -> &str {
        "Alphabetical v1.0"
    }
}

/// Plays the first candidate in long coordinate order.
#[derive(Debug, Clone, Copy, Default)]
pub struct UciSelector;

impl MoveSelector for UciSelector {
    fn select(
        &mut self,
        board: &Board,
        constraints: &Constraints,
    ) -> Result<Selection, SelectError> {
        let moves = candidate_moves(board, constraints)?;
        let mv = moves
            .into_iter()
            .min_by_key(|&mv| long_form(mv))
            .ok_or(SelectError::NoLegalMoves)?;
        Ok(Selection::of(mv))
    }

    fn name(&self) -> &str {
        "FirstMove v1.0"
    }
}
