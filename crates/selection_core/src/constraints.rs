//! Clock state and per-call search constraints.

use cozy_chess::{Color, Move};

/// Clock information as reported by the host, in whole seconds.
///
/// Fields the host does not know (or reports in a form we cannot use) are
/// simply absent; they count as zero when a time budget is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockState {
    /// Fixed time allotted for this single move. Takes precedence over the
    /// per-side clocks when present.
    pub move_time: Option<u64>,
    pub white_time: Option<u64>,
    pub white_inc: Option<u64>,
    pub black_time: Option<u64>,
    pub black_inc: Option<u64>,
}

/// Everything the host pins down for one `select` call.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub clock: ClockState,
    /// Whether thinking may continue on the opponent's time. Accepted for
    /// interface completeness; no current selector ponders.
    pub ponder: bool,
    /// Whether the opponent offered a draw alongside this position.
    pub draw_offered: bool,
    /// When present, the selector must return one of these moves.
    pub root_moves: Option<Vec<Move>>,
}

/// Usable time for the side to move, snapshotted once per `select` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    /// Seconds left on our clock.
    pub remaining: u64,
    /// Seconds gained back per move.
    pub increment: u64,
}

impl TimeBudget {
    /// Derive the budget for `side` from the host-reported clock.
    pub fn for_side(clock: &ClockState, side: Color) -> Self {
        if let Some(secs) = clock.move_time {
            return Self {
                remaining: secs,
                increment: 0,
            };
        }
        let (remaining, increment) = match side {
            Color::White => (clock.white_time, clock.white_inc),
            Color::Black => (clock.black_time, clock.black_inc),
        };
        Self {
            remaining: remaining.unwrap_or(0),
            increment: increment.unwrap_or(0),
        }
    }

    /// True when there is enough time to stop playing it safe.
    ///
    /// The clock spread over a nominal sixty-move game, plus the full
    /// increment, has to exceed ten seconds per move.
    pub fn is_generous(&self) -> bool {
        self.remaining as f64 / 60.0 + self.increment as f64 > 10.0
    }
}

#[cfg(test)]
#[path = "constraints_tests.rs"]
mod constraints_tests;
