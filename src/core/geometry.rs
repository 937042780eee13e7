//! Constant cube topology.
//!
//! The cube's geometry is written down as literal tables rather than derived
//! from 3D coordinates. The tables *are* the definition of which cells move
//! where.

use super::face::FaceId;
use FaceId::{B, D, F, L, R, U};

/// Face-local permutation for a clockwise quarter turn: `new[i] = old[CLOCKWISE[i]]`.
pub const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Face-local permutation for a counterclockwise quarter turn.
///
/// The inverse of [`CLOCKWISE`].
pub const COUNTER_CLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Three cells of one neighboring face touched by a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub face: FaceId,
    pub cells: [usize; 3],
}

const fn strip(face: FaceId, a: usize, b: usize, c: usize) -> Strip {
    Strip {
        face,
        cells: [a, b, c],
    }
}

/// Neighbor strips of each face, in cyclic order.
///
/// Indexed by `FaceId::index()`. On a clockwise turn, strip `i` receives the
/// cells held by strip `(i + 3) % 4`.
pub static ADJACENCY: [[Strip; 4]; 6] = [
    // U
    [strip(B, 0, 1, 2), strip(R, 0, 1, 2), strip(F, 0, 1, 2), strip(L, 0, 1, 2)],
    // D
    [strip(F, 6, 7, 8), strip(R, 6, 7, 8), strip(B, 6, 7, 8), strip(L, 6, 7, 8)],
    // F
    [strip(U, 6, 7, 8), strip(R, 0, 3, 6), strip(D, 2, 1, 0), strip(L, 8, 5, 2)],
    // B
    [strip(U, 2, 1, 0), strip(L, 0, 3, 6), strip(D, 6, 7, 8), strip(R, 8, 5, 2)],
    // L
    [strip(U, 0, 3, 6), strip(F, 0, 3, 6), strip(D, 0, 3, 6), strip(B, 8, 5, 2)],
    // R
    [strip(U, 8, 5, 2), strip(B, 0, 3, 6), strip(D, 8, 5, 2), strip(F, 8, 5, 2)],
];

/// The four neighbor strips of a face.
#[must_use]
pub fn neighbors(face: FaceId) -> &'static [Strip; 4] {
    &ADJACENCY[face.index()]
}

/// Whether `other` shares cells with a turn of `face`.
#[must_use]
pub fn is_neighbor(face: FaceId, other: FaceId) -> bool {
    neighbors(face).iter().any(|s| s.face == other)
}
