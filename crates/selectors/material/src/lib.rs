//! Material-count move selector.
//!
//! Breadth-limited full-width search with a piece-value count at the
//! frontier. This is the "does it see material at all" baseline: no
//! pruning, no quiescence, just every line out to a small fixed depth.

mod eval;
mod search;

use cozy_chess::Board;
use selection_core::{candidate_moves, Constraints, MoveSelector, SelectError, Selection};

pub use eval::evaluate;

/// Default exploration depth in plies.
const DEFAULT_DEPTH: u8 = 2;

/// Selects the root move whose frontier material count is best for the
/// side to move at the root.
#[derive(Debug, Clone)]
pub struct MaterialSelector {
    depth: u8,
}

impl MaterialSelector {
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }

    /// Search `depth` plies deep instead of the default two.
    ///
    /// Depth zero would leave no move to pick, so it is bumped to one.
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }
}

impl Default for MaterialSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for MaterialSelector {
    fn select(
        &mut self,
        board: &Board,
        constraints: &Constraints,
    ) -> Result<Selection, SelectError> {
        let roots = candidate_moves(board, constraints)?;
        let (mv, score) = search::best_move(board, &roots, self.depth)?;
        Ok(Selection {
            mv,
            score: Some(score),
            accept_draw: None,
        })
    }

    fn name(&self) -> &str {
        "Material v1.0"
    }
}
