//! # rubik-sim
//!
//! A 3x3x3 Rubik's Cube state model.
//!
//! ## Design Principles
//!
//! 1. **Table-Driven Geometry**: Face permutations and neighbor strips are
//!    literal constant tables, never derived from 3D coordinates.
//!
//! 2. **Plain Values**: `CubeState` owns its six `[Color; 9]` faces. Copies
//!    are deep; nothing is shared between instances.
//!
//! 3. **Total Core**: Typed rotations cannot fail. Only text and byte input
//!    is validated, and it is rejected before the cube is touched.
//!
//! ## Modules
//!
//! - `core`: Faces, colors, moves, cube state, RNG, errors
//! - `driver`: Random scramble and pseudo-solve loop with recorded snapshots
//! - `render`: Unfolded-net text rendering
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod driver;
pub mod render;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Algorithm, Color, CubeError, CubeRng, CubeRngState, CubeState, Direction, Face, FaceId,
    FaceMap, Move,
};

pub use crate::driver::{scramble, DriverConfig, PseudoSolver, Snapshot, Trajectory};

pub use crate::render::NetRenderer;
