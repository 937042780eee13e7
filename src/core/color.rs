//! Sticker colors.
//!
//! Each face of a fresh cube is filled with its own identity color:
//!
//! | Face | Color  | Symbol |
//! |------|--------|--------|
//! | U    | White  | `w`    |
//! | D    | Yellow | `y`    |
//! | F    | Green  | `g`    |
//! | B    | Blue   | `b`    |
//! | L    | Orange | `o`    |
//! | R    | Red    | `r`    |
//!
//! Colors are opaque tokens compared by equality only.

use serde::{Deserialize, Serialize};

use super::error::CubeError;
use super::face::FaceId;

/// Number of cells on one face.
pub const FACE_CELLS: usize = 9;

/// Number of cells on the whole cube.
pub const CUBE_CELLS: usize = FACE_CELLS * 6;

/// Index of the center cell of a face.
pub const CENTER: usize = 4;

/// One face's cells in row-major order.
pub type Face = [Color; FACE_CELLS];

/// A sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    /// The identity color of a face.
    #[must_use]
    pub const fn for_face(face: FaceId) -> Self {
        match face {
            FaceId::U => Color::White,
            FaceId::D => Color::Yellow,
            FaceId::F => Color::Green,
            FaceId::B => Color::Blue,
            FaceId::L => Color::Orange,
            FaceId::R => Color::Red,
        }
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Orange => 'o',
            Color::Red => 'r',
        }
    }

    /// Parse a color from its symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, CubeError> {
        match symbol {
            'w' => Ok(Color::White),
            'y' => Ok(Color::Yellow),
            'g' => Ok(Color::Green),
            'b' => Ok(Color::Blue),
            'o' => Ok(Color::Orange),
            'r' => Ok(Color::Red),
            other => Err(CubeError::InvalidColor(other)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
