//! Driver configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a scramble + pseudo-solve run.
///
/// Every field has a default, so a TOML file only needs to name the values
/// it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Random quarter turns applied to a fresh cube before solving.
    pub scramble_moves: usize,

    /// Maximum random moves the solve loop may take.
    /// The loop also stops early once the cube is solved.
    pub max_steps: usize,

    /// Random seed. Same seed produces the same scramble and steps.
    pub seed: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            scramble_moves: 15,
            max_steps: 10,
            seed: 42,
        }
    }
}

impl DriverConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scramble length.
    pub fn with_scramble_moves(mut self, moves: usize) -> Self {
        self.scramble_moves = moves;
        self
    }

    /// Set the step cap.
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = steps;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
