//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Algorithm, CubeError, CubeState, FaceId, Move};
use crate::render::NetRenderer;

fn value_error(err: CubeError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for CubeState.
#[pyclass(name = "Cube")]
#[derive(Clone, Debug)]
pub struct PyCube(pub CubeState);

#[pymethods]
impl PyCube {
    /// Create a solved cube.
    #[new]
    fn new() -> Self {
        Self(CubeState::new())
    }

    /// Parse the 54-symbol string form.
    #[staticmethod]
    fn from_string(s: &str) -> PyResult<Self> {
        CubeState::from_cube_string(s).map(Self).map_err(value_error)
    }

    /// Turn a face ("U", "D", "F", "B", "L" or "R") a quarter turn.
    ///
    /// Raises ValueError for any other face name.
    #[pyo3(signature = (face, clockwise = true))]
    fn rotate(&mut self, face: &str, clockwise: bool) -> PyResult<()> {
        self.0.rotate_named(face, clockwise).map_err(value_error)
    }

    /// Apply moves written in standard notation, e.g. "R U R' U'".
    fn apply(&mut self, notation: &str) -> PyResult<()> {
        let alg: Algorithm = notation.parse().map_err(value_error)?;
        self.0.apply_algorithm(&alg);
        Ok(())
    }

    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    /// Independent deep copy.
    fn duplicate(&self) -> Self {
        Self(self.0.duplicate())
    }

    /// The 54-symbol string: faces U, D, F, B, L, R, each row-major.
    fn serialize(&self) -> String {
        self.0.cube_string()
    }

    /// One face's 9 symbols in row-major order.
    fn face(&self, face: &str) -> PyResult<Vec<char>> {
        let face: FaceId = face.parse().map_err(value_error)?;
        Ok(self.0.face(face).iter().map(|c| c.symbol()).collect())
    }

    /// Unfolded text net.
    fn render(&self) -> String {
        NetRenderer::new().render(&self.0)
    }

    fn __repr__(&self) -> String {
        format!("Cube('{}')", self.0.cube_string())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Parse a move such as "F" or "R'".
    #[new]
    fn new(notation: &str) -> PyResult<Self> {
        notation.parse().map(Self).map_err(value_error)
    }

    #[getter]
    fn face(&self) -> String {
        self.0.face.to_string()
    }

    #[getter]
    fn clockwise(&self) -> bool {
        self.0.is_clockwise()
    }

    fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }

    fn __repr__(&self) -> String {
        format!("Move('{}')", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        (self.0.face.index() * 2 + usize::from(self.0.is_clockwise())) as u64
    }
}
