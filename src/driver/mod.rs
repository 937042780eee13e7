//! Random driver: scrambles a cube and records a pseudo-solve run.
//!
//! ## Overview
//!
//! - **DriverConfig**: scramble length, step cap, seed
//! - **PseudoSolver**: applies random moves until solved or capped
//! - **Trajectory**: the recorded sequence of snapshots
//!
//! ## Usage
//!
//! ```
//! use rubik_sim::driver::{DriverConfig, PseudoSolver};
//!
//! let config = DriverConfig::default().with_seed(7).with_max_steps(10);
//! let trajectory = PseudoSolver::new(config).run();
//!
//! assert!(trajectory.move_count() <= 10);
//! ```

pub mod config;
pub mod solver;
pub mod trajectory;

pub use config::DriverConfig;
pub use solver::{scramble, PseudoSolver};
pub use trajectory::{Snapshot, Trajectory};
