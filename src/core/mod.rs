//! Core cube types: faces, colors, moves, the cube state, RNG, errors.
//!
//! Everything here is a plain in-memory value. Rendering and the random
//! driver live in sibling modules and only use the public API below.

pub mod color;
pub mod cube;
pub mod error;
pub mod face;
pub mod geometry;
pub mod moves;
pub mod rng;

pub use color::{Color, Face, CENTER, CUBE_CELLS, FACE_CELLS};
pub use cube::CubeState;
pub use error::CubeError;
pub use face::{FaceId, FaceMap};
pub use moves::{Algorithm, Direction, Move};
pub use rng::{CubeRng, CubeRngState};
