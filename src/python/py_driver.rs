//! Driver bindings for Python.

use pyo3::prelude::*;

use crate::driver::{DriverConfig, PseudoSolver, Trajectory};

use super::py_core::{PyCube, PyMove};

/// Python wrapper for DriverConfig.
#[pyclass(name = "DriverConfig")]
#[derive(Clone)]
pub struct PyDriverConfig(pub DriverConfig);

#[pymethods]
impl PyDriverConfig {
    /// Create a driver configuration.
    ///
    /// # Arguments
    /// - scramble_moves: Random moves applied before solving (default: 15)
    /// - max_steps: Cap on solve-loop moves (default: 10)
    /// - seed: Random seed (default: 42)
    #[new]
    #[pyo3(signature = (scramble_moves = 15, max_steps = 10, seed = 42))]
    fn new(scramble_moves: usize, max_steps: usize, seed: u64) -> Self {
        Self(
            DriverConfig::default()
                .with_scramble_moves(scramble_moves)
                .with_max_steps(max_steps)
                .with_seed(seed),
        )
    }

    #[getter]
    fn scramble_moves(&self) -> usize {
        self.0.scramble_moves
    }

    #[getter]
    fn max_steps(&self) -> usize {
        self.0.max_steps
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    fn __repr__(&self) -> String {
        format!(
            "DriverConfig(scramble_moves={}, max_steps={}, seed={})",
            self.0.scramble_moves, self.0.max_steps, self.0.seed
        )
    }
}

/// Python wrapper for a recorded driver run.
#[pyclass(name = "Trajectory")]
pub struct PyTrajectory {
    inner: Trajectory,
}

#[pymethods]
impl PyTrajectory {
    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed
    }

    #[getter]
    fn solved(&self) -> bool {
        self.inner.solved
    }

    /// Scramble in standard notation.
    #[getter]
    fn scramble(&self) -> String {
        self.inner.scramble.to_string()
    }

    /// Snapshot cubes, starting state first.
    fn cubes(&self) -> Vec<PyCube> {
        self.inner.iter().map(|s| PyCube(s.cube.duplicate())).collect()
    }

    /// Snapshot 54-symbol strings, starting state first.
    fn states(&self) -> Vec<String> {
        self.inner.iter().map(|s| s.cube.cube_string()).collect()
    }

    /// Moves taken by the solve loop.
    fn moves(&self) -> Vec<PyMove> {
        self.inner.moves().iter().map(|&m| PyMove(m)).collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(seed={}, steps={}, solved={})",
            self.inner.seed,
            self.inner.move_count(),
            self.inner.solved
        )
    }
}

/// Scramble a fresh cube and run the random-move pseudo-solver.
#[pyfunction]
#[pyo3(signature = (config = None))]
pub fn run_pseudo_solver(config: Option<PyDriverConfig>) -> PyTrajectory {
    let config = config.map(|c| c.0).unwrap_or_default();
    PyTrajectory {
        inner: PseudoSolver::new(config).run(),
    }
}
