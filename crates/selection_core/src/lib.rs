//! Core contracts for pluggable chess move selection.
//!
//! The crates under `selectors/` implement different ways of choosing a
//! move; this crate holds the pieces they all share: the [`MoveSelector`]
//! trait, the adapter over the rules engine, move notation, and the clock
//! and constraint types a host hands in per call.

pub mod constraints;
pub mod notation;
pub mod rules;

pub use constraints::*;
pub use notation::*;
pub use rules::*;

// Re-export the rules-engine types selectors and hosts pass around.
pub use cozy_chess::{Board, Color, Move, Piece};

use thiserror::Error;

/// Why a selector could not produce a move.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The root position has no legal moves (checkmate or stalemate).
    #[error("no legal moves in this position")]
    NoLegalMoves,
    /// The caller restricted the root moves, but none of them is legal here.
    #[error("root move restriction excludes every legal move")]
    EmptyRestriction,
}

/// One chosen move plus the metadata a host may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The move to play.
    pub mv: Move,
    /// Evaluation of the chosen line, when the selector computed one.
    pub score: Option<i32>,
    /// Whether to accept an offered draw. `None` means no opinion.
    pub accept_draw: Option<bool>,
}

impl Selection {
    /// A bare selection: just the move, no metadata.
    pub fn of(mv: Move) -> Self {
        Self {
            mv,
            score: None,
            accept_draw: None,
        }
    }
}

/// Trait that all move selectors implement.
///
/// This allows swapping between the material searcher, the random baseline,
/// and the deterministic orderings without the host caring which is which.
pub trait MoveSelector: Send {
    /// Pick exactly one legal move for the side to move in `board`.
    ///
    /// The board is never mutated; speculative moves are applied to private
    /// copies only. When `constraints.root_moves` is present, the returned
    /// move must come from that set.
    fn select(
        &mut self,
        board: &Board,
        constraints: &Constraints,
    ) -> Result<Selection, SelectError>;

    /// Short human-readable name for logs and match reports.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
