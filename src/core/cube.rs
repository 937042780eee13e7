//! Cube state: six faces of nine cells.
//!
//! ## Rotation
//!
//! A quarter turn of a face does two things:
//! 1. Permutes the face's own 9 cells ([`CLOCKWISE`] / [`COUNTER_CLOCKWISE`]).
//! 2. Cycles the 3-cell strips of its 4 neighbors ([`ADJACENCY`]).
//!
//! All four strips are read before any is written, so the cycle never reads a
//! value it has already overwritten.
//!
//! ## Ownership
//!
//! `CubeState` owns its arrays outright. `duplicate()` (or `clone()`) yields a
//! fully independent copy, which is how the driver snapshots a sequence of
//! states.
//!
//! [`CLOCKWISE`]: super::geometry::CLOCKWISE
//! [`COUNTER_CLOCKWISE`]: super::geometry::COUNTER_CLOCKWISE
//! [`ADJACENCY`]: super::geometry::ADJACENCY

use log::trace;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::{Color, Face, CUBE_CELLS, FACE_CELLS};
use super::error::CubeError;
use super::face::{FaceId, FaceMap};
use super::geometry::{self, CLOCKWISE, COUNTER_CLOCKWISE};
use super::moves::{Algorithm, Direction, Move};

/// Complete cube state.
///
/// ## Example
///
/// ```
/// use rubik_sim::core::{CubeState, FaceId};
///
/// let mut cube = CubeState::new();
/// assert!(cube.is_solved());
///
/// cube.rotate(FaceId::F, true);
/// assert!(!cube.is_solved());
///
/// cube.rotate(FaceId::F, false);
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: FaceMap<Face>,
}

impl CubeState {
    /// Create a solved cube: every face filled with its identity color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            faces: FaceMap::new(|face| [Color::for_face(face); FACE_CELLS]),
        }
    }

    // === Access ===

    /// Get one face's cells in row-major order.
    #[must_use]
    pub fn face(&self, face: FaceId) -> &Face {
        &self.faces[face]
    }

    /// Get all faces.
    #[must_use]
    pub fn faces(&self) -> &FaceMap<Face> {
        &self.faces
    }

    /// Overwrite a single cell.
    ///
    /// Not a legal cube move; used to build fixture states.
    pub fn set_cell(&mut self, face: FaceId, index: usize, color: Color) -> Result<(), CubeError> {
        let cell = self.faces[face]
            .get_mut(index)
            .ok_or(CubeError::CellOutOfRange(index))?;
        *cell = color;
        Ok(())
    }

    // === Rotation ===

    /// Turn `face` a quarter turn.
    pub fn rotate(&mut self, face: FaceId, clockwise: bool) {
        trace!("rotate {}", Move::new(face, Direction::from_clockwise(clockwise)));
        self.permute_face(face, clockwise);
        self.cycle_sides(face, clockwise);
    }

    /// Turn a face named by its letter.
    ///
    /// Rejects anything other than `U`, `D`, `F`, `B`, `L`, `R` without
    /// touching the cube.
    pub fn rotate_named(&mut self, face: &str, clockwise: bool) -> Result<(), CubeError> {
        let face: FaceId = face.parse()?;
        self.rotate(face, clockwise);
        Ok(())
    }

    /// Apply a single move.
    pub fn apply(&mut self, m: Move) {
        self.rotate(m.face, m.is_clockwise());
    }

    /// Apply every move of an algorithm in order.
    pub fn apply_algorithm(&mut self, alg: &Algorithm) {
        for &m in alg.iter() {
            self.apply(m);
        }
    }

    fn permute_face(&mut self, face: FaceId, clockwise: bool) {
        let indices = if clockwise { CLOCKWISE } else { COUNTER_CLOCKWISE };
        let old = self.faces[face];
        self.faces[face] = indices.map(|i| old[i]);
    }

    fn cycle_sides(&mut self, face: FaceId, clockwise: bool) {
        let strips = *geometry::neighbors(face);
        let buffer: [[Color; 3]; 4] = strips.map(|s| s.cells.map(|i| self.faces[s.face][i]));

        // Clockwise: each strip takes the cells of the strip behind it.
        let offset = if clockwise { 3 } else { 1 };
        for (i, strip) in strips.iter().enumerate() {
            let source = &buffer[(i + offset) % 4];
            for (&cell, &color) in strip.cells.iter().zip(source) {
                self.faces[strip.face][cell] = color;
            }
        }
    }

    // === Queries ===

    /// Whether every face is a single uniform color.
    ///
    /// Faces are not required to carry their identity color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .values()
            .all(|face| face.iter().all(|&c| c == face[0]))
    }

    /// Deep copy. Mutating either copy never affects the other.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Count of each color across all 54 cells.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for face in self.faces.values() {
            for &color in face {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    // === Serialization ===

    /// Flatten to 54 cells: faces in order U, D, F, B, L, R, each row-major.
    #[must_use]
    pub fn serialize(&self) -> [Color; CUBE_CELLS] {
        let mut out = [Color::White; CUBE_CELLS];
        for (chunk, face) in out.chunks_exact_mut(FACE_CELLS).zip(self.faces.values()) {
            chunk.copy_from_slice(face);
        }
        out
    }

    /// The 54-symbol string form of [`serialize`](Self::serialize).
    #[must_use]
    pub fn cube_string(&self) -> String {
        self.serialize().iter().map(|c| c.symbol()).collect()
    }

    /// Parse the 54-symbol string form.
    ///
    /// Only the symbols are validated; the result need not be reachable by
    /// legal moves.
    pub fn from_cube_string(s: &str) -> Result<Self, CubeError> {
        let mut colors = [Color::White; CUBE_CELLS];
        let mut len = 0;
        for symbol in s.chars() {
            if len == CUBE_CELLS {
                return Err(CubeError::InvalidLength(s.chars().count()));
            }
            colors[len] = Color::from_symbol(symbol)?;
            len += 1;
        }
        if len != CUBE_CELLS {
            return Err(CubeError::InvalidLength(len));
        }

        let faces = FaceMap::new(|face| {
            let start = face.index() * FACE_CELLS;
            let mut cells = [Color::White; FACE_CELLS];
            cells.copy_from_slice(&colors[start..start + FACE_CELLS]);
            cells
        });
        Ok(Self { faces })
    }

    /// Encode as a compact binary checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CubeError> {
        bincode::serialize(self).map_err(|err| CubeError::Encode(err.to_string()))
    }

    /// Decode a checkpoint produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CubeError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.cube_string())
    }
}

impl FromStr for CubeState {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CubeState::from_cube_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::CENTER;

    const ALL_MOVES: [(FaceId, bool); 12] = [
        (FaceId::U, true),
        (FaceId::U, false),
        (FaceId::D, true),
        (FaceId::D, false),
        (FaceId::F, true),
        (FaceId::F, false),
        (FaceId::B, true),
        (FaceId::B, false),
        (FaceId::L, true),
        (FaceId::L, false),
        (FaceId::R, true),
        (FaceId::R, false),
    ];

    /// A cube mixed by a fixed sequence of moves.
    fn scrambled() -> CubeState {
        let mut cube = CubeState::new();
        cube.apply_algorithm(&Algorithm::parse("R U' F L2 D B' R' U").unwrap());
        cube
    }

    #[test]
    fn test_new_is_solved() {
        let cube = CubeState::new();

        assert!(cube.is_solved());
        for face in FaceId::ALL {
            assert_eq!(cube.face(face), &[Color::for_face(face); 9]);
        }
    }

    #[test]
    fn test_single_turn_unsolves() {
        for (face, cw) in ALL_MOVES {
            let mut cube = CubeState::new();
            cube.rotate(face, cw);
            assert!(!cube.is_solved(), "{face} cw={cw} left cube solved");
        }
    }

    #[test]
    fn test_rotation_preserves_color_counts() {
        let start = scrambled();
        let counts = start.color_counts();

        for (face, cw) in ALL_MOVES {
            let mut cube = start.clone();
            cube.rotate(face, cw);
            assert_eq!(cube.color_counts(), counts);
        }

        let fresh = CubeState::new().color_counts();
        assert_eq!(fresh.len(), 6);
        assert!(fresh.values().all(|&n| n == 9));
    }

    #[test]
    fn test_inverse_restores() {
        let start = scrambled();

        for (face, cw) in ALL_MOVES {
            let mut cube = start.clone();
            cube.rotate(face, cw);
            cube.rotate(face, !cw);
            assert_eq!(cube, start, "{face} cw={cw} not undone");
        }
    }

    #[test]
    fn test_four_turns_identity() {
        let start = scrambled();

        for face in FaceId::ALL {
            let mut cube = start.clone();
            for _ in 0..4 {
                cube.rotate(face, true);
            }
            assert_eq!(cube, start);
        }
    }

    #[test]
    fn test_center_invariant() {
        let start = scrambled();

        for (face, cw) in ALL_MOVES {
            let mut cube = start.clone();
            cube.rotate(face, cw);
            assert_eq!(cube.face(face)[CENTER], start.face(face)[CENTER]);
        }
    }

    #[test]
    fn test_face_permutation() {
        let mut cube = CubeState::new();
        let labelled = [
            Color::White,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Orange,
            Color::Red,
            Color::White,
            Color::Yellow,
            Color::Green,
        ];
        for (i, &c) in labelled.iter().enumerate() {
            cube.set_cell(FaceId::U, i, c).unwrap();
        }

        cube.rotate(FaceId::U, true);
        let expected: [Color; 9] = CLOCKWISE.map(|i| labelled[i]);
        assert_eq!(cube.face(FaceId::U), &expected);
    }

    #[test]
    fn test_rotate_named() {
        let mut cube = CubeState::new();
        cube.rotate_named("F", true).unwrap();

        let mut expected = CubeState::new();
        expected.rotate(FaceId::F, true);
        assert_eq!(cube, expected);
    }

    #[test]
    fn test_rotate_named_rejects_unknown_face() {
        let mut cube = scrambled();
        let before = cube.clone();

        assert_eq!(
            cube.rotate_named("X", true),
            Err(CubeError::InvalidFace("X".to_string()))
        );
        assert!(cube.rotate_named("", false).is_err());
        assert_eq!(cube, before);
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut cube = CubeState::new();
        assert_eq!(
            cube.set_cell(FaceId::U, 9, Color::Red),
            Err(CubeError::CellOutOfRange(9))
        );
    }

    #[test]
    fn test_solved_detection() {
        let mut cube = CubeState::new();
        cube.set_cell(FaceId::L, 7, Color::Red).unwrap();
        assert!(!cube.is_solved());

        cube.set_cell(FaceId::L, 7, Color::Orange).unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solved_ignores_identity_colors() {
        let mut cube = CubeState::new();
        for i in 0..9 {
            cube.set_cell(FaceId::U, i, Color::Yellow).unwrap();
            cube.set_cell(FaceId::D, i, Color::White).unwrap();
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = scrambled();
        let copy = original.duplicate();
        let snapshot = copy.cube_string();

        original.rotate(FaceId::R, true);
        assert_eq!(copy.cube_string(), snapshot);

        let mut copy = copy;
        let original_string = original.cube_string();
        copy.rotate(FaceId::L, false);
        assert_eq!(original.cube_string(), original_string);
    }

    #[test]
    fn test_serialize_order() {
        let cube = CubeState::new();
        assert_eq!(
            cube.cube_string(),
            "wwwwwwwwwyyyyyyyyygggggggggbbbbbbbbbooooooooorrrrrrrrr"
        );

        let flat = cube.serialize();
        assert_eq!(flat.len(), 54);
        assert_eq!(flat[9], Color::Yellow);
        assert_eq!(flat[53], Color::Red);
    }

    #[test]
    fn test_cube_string_parse() {
        let cube = scrambled();
        let parsed: CubeState = cube.cube_string().parse().unwrap();
        assert_eq!(parsed, cube);

        assert_eq!(
            CubeState::from_cube_string("www"),
            Err(CubeError::InvalidLength(3))
        );
        let mut bad = CubeState::new().cube_string();
        bad.replace_range(0..1, "x");
        assert_eq!(
            CubeState::from_cube_string(&bad),
            Err(CubeError::InvalidColor('x'))
        );
    }

    #[test]
    fn test_cube_string_rejects_overlong_input() {
        let long = "w".repeat(CUBE_CELLS * 1000);
        assert_eq!(
            CubeState::from_cube_string(&long),
            Err(CubeError::InvalidLength(CUBE_CELLS * 1000))
        );

        // Length is reported before later symbols are looked at.
        let mut tail = CubeState::new().cube_string();
        tail.push('x');
        assert_eq!(
            CubeState::from_cube_string(&tail),
            Err(CubeError::InvalidLength(CUBE_CELLS + 1))
        );
    }

    #[test]
    fn test_bytes_checkpoint() {
        let cube = scrambled();
        let bytes = cube.to_bytes().unwrap();
        assert_eq!(CubeState::from_bytes(&bytes).unwrap(), cube);

        assert!(matches!(
            CubeState::from_bytes(&[1, 2]),
            Err(CubeError::Decode(_))
        ));
    }

    #[test]
    fn test_encode_and_decode_errors_are_distinct() {
        let decode = CubeState::from_bytes(&[]).unwrap_err();
        assert!(decode.to_string().starts_with("failed to decode"));

        let encode = CubeError::Encode("sink closed".to_string());
        assert_eq!(encode.to_string(), "failed to encode cube state: sink closed");
        assert_ne!(encode, CubeError::Decode("sink closed".to_string()));
    }

    #[test]
    fn test_serde_json() {
        let cube = scrambled();
        let json = serde_json::to_string(&cube).unwrap();
        let back: CubeState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cube);
    }
}
