//! Python bindings for rubik-sim.
//!
//! # Quick Start
//!
//! ```python
//! import rubik_sim as rs
//!
//! cube = rs.Cube()
//! cube.rotate("F")
//! cube.rotate("F", clockwise=False)
//! assert cube.is_solved()
//!
//! config = rs.DriverConfig(scramble_moves=15, max_steps=10, seed=42)
//! trajectory = rs.run_pseudo_solver(config)
//! for state in trajectory.states():
//!     print(state)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_driver;

pub use py_core::*;
pub use py_driver::*;

/// rubik-sim: a 3x3x3 cube state model.
#[pymodule]
fn rubik_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyCube>()?;
    m.add_class::<PyMove>()?;

    // Driver
    m.add_class::<PyDriverConfig>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_function(wrap_pyfunction!(run_pseudo_solver, m)?)?;

    Ok(())
}
