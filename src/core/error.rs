//! Errors for the string-facing and decoding entry points.
//!
//! Typed operations (`CubeState::rotate` with a `FaceId`) are total. Only
//! input that arrives as text or bytes can be rejected, plus the binary
//! checkpoint encoder.

use thiserror::Error;

/// Errors raised when external input cannot be turned into cube values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    #[error("unknown face identifier {0:?}, expected one of U, D, F, B, L, R")]
    InvalidFace(String),

    #[error("malformed move {0:?}, expected a face letter optionally followed by ' or 2")]
    InvalidMove(String),

    #[error("unknown color symbol {0:?}, expected one of w, y, g, b, o, r")]
    InvalidColor(char),

    #[error("cube string has {0} symbols, expected 54")]
    InvalidLength(usize),

    #[error("cell index {0} is out of range, faces have cells 0..=8")]
    CellOutOfRange(usize),

    #[error("failed to encode cube state: {0}")]
    Encode(String),

    #[error("failed to decode cube state: {0}")]
    Decode(String),
}

/// Only the decode path converts implicitly; encoding maps to `Encode`.
impl From<bincode::Error> for CubeError {
    fn from(err: bincode::Error) -> Self {
        CubeError::Decode(err.to_string())
    }
}
