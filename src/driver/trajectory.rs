//! Recorded sequence of cube states.
//!
//! A trajectory captures one driver run:
//! - The scramble that was applied
//! - A snapshot of the cube before the first step and after every step
//! - Whether the run ended on a solved cube

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Algorithm, CubeState, Move};

/// One recorded cube state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Position in the trajectory (0 = starting state).
    pub index: usize,

    /// The move that produced this state, `None` for the starting state.
    pub applied: Option<Move>,

    /// Independent copy of the cube at this point.
    pub cube: CubeState,
}

impl Snapshot {
    pub fn new(index: usize, applied: Option<Move>, cube: CubeState) -> Self {
        Self {
            index,
            applied,
            cube,
        }
    }
}

/// A complete driver run.
///
/// `steps` is an `im::Vector`, so cloning a trajectory is O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trajectory {
    /// Seed the run was started with.
    pub seed: u64,

    /// Moves applied to the fresh cube before step 0.
    pub scramble: Algorithm,

    /// Snapshots in order; the first is the starting state.
    pub steps: Vector<Snapshot>,

    /// Whether the last snapshot is solved.
    pub solved: bool,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new(seed: u64, scramble: Algorithm) -> Self {
        Self {
            seed,
            scramble,
            steps: Vector::new(),
            solved: false,
        }
    }

    /// Record a snapshot of `cube`.
    ///
    /// The cube is duplicated, so later mutation by the caller does not
    /// reach the recorded state.
    pub fn record(&mut self, applied: Option<Move>, cube: &CubeState) {
        let index = self.steps.len();
        self.steps.push_back(Snapshot::new(index, applied, cube.duplicate()));
        self.solved = cube.is_solved();
    }

    /// Number of snapshots, including the starting state.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of moves taken after the starting state.
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The moves applied during the run, in order.
    pub fn moves(&self) -> Algorithm {
        self.steps.iter().filter_map(|s| s.applied).collect()
    }

    /// The final recorded state.
    pub fn last(&self) -> Option<&CubeState> {
        self.steps.back().map(|s| &s.cube)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.steps.iter()
    }
}
