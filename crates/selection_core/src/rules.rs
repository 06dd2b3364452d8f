//! Thin adapter over the `cozy_chess` rules engine.
//!
//! Legality, move application, and board bookkeeping all belong to the
//! rules crate; selectors only ever reach it through these helpers.

use cozy_chess::{Board, Move};

use crate::{Constraints, SelectError};

/// Collect the legal moves of `board` in the generator's order.
///
/// The order is not specified, but it is stable for a given position,
/// which is what the breadth-first searcher relies on for tie-breaking.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|batch| {
        moves.extend(batch);
        false
    });
    moves
}

/// The position after `mv`, leaving `board` untouched.
pub fn apply(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    // Callers only hand us moves that came out of `legal_moves`.
    next.play_unchecked(mv);
    next
}

/// The root moves a selector may return: all legal moves, narrowed by the
/// caller's restriction when one is present.
///
/// Restricted moves that are not legal in `board` are dropped. A
/// restriction that leaves nothing is reported separately from a position
/// that had no legal moves to begin with.
pub fn candidate_moves(
    board: &Board,
    constraints: &Constraints,
) -> Result<Vec<Move>, SelectError> {
    let legal = legal_moves(board);
    if legal.is_empty() {
        return Err(SelectError::NoLegalMoves);
    }
    match &constraints.root_moves {
        None => Ok(legal),
        Some(allowed) => {
            let narrowed: Vec<Move> = legal
                .into_iter()
                .filter(|mv| allowed.contains(mv))
                .collect();
            if narrowed.is_empty() {
                Err(SelectError::EmptyRestriction)
            } else {
                Ok(narrowed)
            }
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
