//! Face identification and per-face data storage.
//!
//! ## FaceId
//!
//! The six sides of the cube: Up, Down, Front, Back, Left, Right.
//! `FaceId::ALL` fixes the canonical order U, D, F, B, L, R used by
//! serialization.
//!
//! ## FaceMap
//!
//! Per-face storage backed by a `[T; 6]` for O(1) access.
//! Supports iteration and indexing by `FaceId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::CubeError;

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceId {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl FaceId {
    /// All faces in canonical order.
    pub const ALL: [FaceId; 6] = [
        FaceId::U,
        FaceId::D,
        FaceId::F,
        FaceId::B,
        FaceId::L,
        FaceId::R,
    ];

    /// Position of this face in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter name of the face.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            FaceId::U => 'U',
            FaceId::D => 'D',
            FaceId::F => 'F',
            FaceId::B => 'B',
            FaceId::L => 'L',
            FaceId::R => 'R',
        }
    }

    /// Parse a face from its letter (case-insensitive).
    ///
    /// ```
    /// use rubik_sim::core::FaceId;
    ///
    /// assert_eq!(FaceId::from_letter('f'), Some(FaceId::F));
    /// assert_eq!(FaceId::from_letter('X'), None);
    /// ```
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'U' => Some(FaceId::U),
            'D' => Some(FaceId::D),
            'F' => Some(FaceId::F),
            'B' => Some(FaceId::B),
            'L' => Some(FaceId::L),
            'R' => Some(FaceId::R),
            _ => None,
        }
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for FaceId {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                FaceId::from_letter(letter).ok_or_else(|| CubeError::InvalidFace(s.to_string()))
            }
            _ => Err(CubeError::InvalidFace(s.to_string())),
        }
    }
}

/// Per-face data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rubik_sim::core::{FaceId, FaceMap};
///
/// let mut turns: FaceMap<u32> = FaceMap::with_value(0);
/// turns[FaceId::R] += 1;
///
/// assert_eq!(turns[FaceId::R], 1);
/// assert_eq!(turns[FaceId::L], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a new FaceMap with values from a factory function.
    pub fn new(factory: impl Fn(FaceId) -> T) -> Self {
        Self {
            data: FaceId::ALL.map(factory),
        }
    }

    /// Create a new FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's data.
    #[must_use]
    pub fn get(&self, face: FaceId) -> &T {
        &self.data[face.index()]
    }

    /// Get a mutable reference to a face's data.
    pub fn get_mut(&mut self, face: FaceId) -> &mut T {
        &mut self.data[face.index()]
    }

    /// Iterate over (FaceId, &T) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &T)> {
        FaceId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<FaceId> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: FaceId) -> &Self::Output {
        self.get(face)
    }
}

impl<T> IndexMut<FaceId> for FaceMap<T> {
    fn index_mut(&mut self, face: FaceId) -> &mut Self::Output {
        self.get_mut(face)
    }
}
