//! Move representation: face + turn direction.
//!
//! A `Move` is a single quarter turn. An `Algorithm` is an ordered sequence of
//! moves written in the usual notation:
//! - `"R"` = R clockwise
//! - `"R'"` = R counterclockwise
//! - `"R2"` = two clockwise quarter turns (expanded on parse)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::CubeError;
use super::face::FaceId;

/// Direction of a quarter turn, seen looking at the turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Map the `clockwise` flag used by `CubeState::rotate`.
    #[must_use]
    pub const fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        matches!(self, Direction::Clockwise)
    }

    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A single quarter turn.
///
/// ## Example
///
/// ```
/// use rubik_sim::core::{Direction, FaceId, Move};
///
/// let m: Move = "F'".parse().unwrap();
/// assert_eq!(m, Move::new(FaceId::F, Direction::CounterClockwise));
/// assert_eq!(m.inverse(), Move::cw(FaceId::F));
/// assert_eq!(m.to_string(), "F'");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: FaceId,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(face: FaceId, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Clockwise quarter turn of `face`.
    #[must_use]
    pub const fn cw(face: FaceId) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    /// Counterclockwise quarter turn of `face`.
    #[must_use]
    pub const fn ccw(face: FaceId) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }

    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        self.direction.is_clockwise()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .ok_or_else(|| CubeError::InvalidMove(s.to_string()))?;
        let face = FaceId::from_letter(face).ok_or_else(|| CubeError::InvalidFace(s.to_string()))?;

        match chars.as_str() {
            "" => Ok(Move::cw(face)),
            "'" => Ok(Move::ccw(face)),
            _ => Err(CubeError::InvalidMove(s.to_string())),
        }
    }
}

/// An ordered sequence of moves.
///
/// SmallVec keeps short scrambles off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Algorithm {
    pub moves: SmallVec<[Move; 16]>,
}

impl Algorithm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_moves(moves: &[Move]) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
        }
    }

    /// Parse whitespace-separated notation, e.g. `"R U R' U' F2"`.
    ///
    /// A double turn is written `X2` (two clockwise quarter turns) or `X2'`
    /// (two counterclockwise). The `2` must follow the face letter directly;
    /// `"2F"` and `"F'2"` are rejected.
    pub fn parse(notation: &str) -> Result<Self, CubeError> {
        let mut alg = Self::new();
        for token in notation.split_whitespace() {
            match Self::parse_double(token)? {
                Some(m) => {
                    alg.push(m);
                    alg.push(m);
                }
                None => alg.push(token.parse()?),
            }
        }
        Ok(alg)
    }

    /// `Some(quarter)` for `X2` / `X2'`, `None` when the token has no `2`.
    fn parse_double(token: &str) -> Result<Option<Move>, CubeError> {
        let (face, direction) = if let Some(face) = token.strip_suffix("2'") {
            (face, Direction::CounterClockwise)
        } else if let Some(face) = token.strip_suffix('2') {
            (face, Direction::Clockwise)
        } else if token.contains('2') {
            return Err(CubeError::InvalidMove(token.to_string()));
        } else {
            return Ok(None);
        };

        let face: FaceId = face
            .parse()
            .map_err(|_| CubeError::InvalidMove(token.to_string()))?;
        Ok(Some(Move::new(face, direction)))
    }

    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            moves: self.moves.iter().rev().map(|m| m.inverse()).collect(),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl FromStr for Algorithm {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::parse(s)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_inverse() {
        assert_eq!(Direction::Clockwise.inverse(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.inverse(), Direction::Clockwise);
        assert!(Direction::from_clockwise(true).is_clockwise());
        assert!(!Direction::from_clockwise(false).is_clockwise());
    }

    #[test]
    fn test_move_parse() {
        assert_eq!("U".parse::<Move>(), Ok(Move::cw(FaceId::U)));
        assert_eq!("r'".parse::<Move>(), Ok(Move::ccw(FaceId::R)));
        assert_eq!(
            "X".parse::<Move>(),
            Err(CubeError::InvalidFace("X".to_string()))
        );
        assert_eq!(
            "F''".parse::<Move>(),
            Err(CubeError::InvalidMove("F''".to_string()))
        );
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::cw(FaceId::B).to_string(), "B");
        assert_eq!(Move::ccw(FaceId::L).to_string(), "L'");
    }

    #[test]
    fn test_algorithm_parse() {
        let alg = Algorithm::parse("R U R' U'").unwrap();
        assert_eq!(
            alg.moves.as_slice(),
            &[
                Move::cw(FaceId::R),
                Move::cw(FaceId::U),
                Move::ccw(FaceId::R),
                Move::ccw(FaceId::U),
            ]
        );
        assert_eq!(alg.to_string(), "R U R' U'");
    }

    #[test]
    fn test_algorithm_double_turn() {
        let alg = Algorithm::parse("F2 D2'").unwrap();
        assert_eq!(alg.to_string(), "F F D' D'");
        assert!(Algorithm::parse("F22").is_err());
        assert!(Algorithm::parse("2").is_err());
        assert_eq!(
            Algorithm::parse("2F"),
            Err(CubeError::InvalidMove("2F".to_string()))
        );
        assert_eq!(
            Algorithm::parse("F'2"),
            Err(CubeError::InvalidMove("F'2".to_string()))
        );
        assert_eq!(
            Algorithm::parse("R 2U"),
            Err(CubeError::InvalidMove("2U".to_string()))
        );
    }

    #[test]
    fn test_algorithm_parse_empty() {
        let alg = Algorithm::parse("   ").unwrap();
        assert!(alg.is_empty());
    }

    #[test]
    fn test_algorithm_parse_rejects_bad_token() {
        assert_eq!(
            Algorithm::parse("R Q"),
            Err(CubeError::InvalidFace("Q".to_string()))
        );
    }

    #[test]
    fn test_algorithm_inverse() {
        let alg = Algorithm::parse("R U F'").unwrap();
        assert_eq!(alg.inverse().to_string(), "F U' R'");
        assert_eq!(alg.inverse().inverse(), alg);
    }

    #[test]
    fn test_move_serde() {
        let m = Move::ccw(FaceId::D);
        let json = serde_json::to_string(&m).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
