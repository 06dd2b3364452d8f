//! Builds a configured move selector.
//!
//! Hosts name a selector (plus optional knobs) in their config file; this
//! crate turns that into a boxed [`MoveSelector`] without the host linking
//! against every implementation itself.

use clock_selector::ClockSelector;
use lexical_selector::{SanSelector, UciSelector};
use material_selector::MaterialSelector;
use random_selector::RandomSelector;
use selection_core::MoveSelector;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod lib_tests;

/// Which selection policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    /// Breadth-first material search.
    Material,
    /// Uniform random choice.
    Random,
    /// First move in short algebraic order.
    Alphabetical,
    /// First move in long coordinate order.
    FirstUci,
    /// Clock-driven composite.
    Clock,
}

/// Host-side selector configuration, usually loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub kind: SelectorKind,
    /// Search depth for the material selector. Ignored by the others.
    pub depth: Option<u8>,
    /// Fixed RNG seed for reproducible runs. Unset means real entropy.
    pub seed: Option<u64>,
}

impl SelectorConfig {
    /// A bare config: the named kind with every knob at its default.
    pub fn of(kind: SelectorKind) -> Self {
        Self {
            kind,
            depth: None,
            seed: None,
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Build the configured selector.
pub fn build(config: &SelectorConfig) -> Box<dyn MoveSelector> {
    match config.kind {
        SelectorKind::Material => Box::new(match config.depth {
            Some(depth) => MaterialSelector::with_depth(depth),
            None => MaterialSelector::new(),
        }),
        SelectorKind::Random => Box::new(match config.seed {
            Some(seed) => RandomSelector::seeded(seed),
            None => RandomSelector::new(),
        }),
        SelectorKind::Alphabetical => Box::new(SanSelector),
        SelectorKind::FirstUci => Box::new(UciSelector),
        SelectorKind::Clock => Box::new(match config.seed {
            Some(seed) => ClockSelector::seeded(seed),
            None => ClockSelector::new(),
        }),
    }
}
