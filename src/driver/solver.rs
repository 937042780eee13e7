//! Scramble and pseudo-solve loops.
//!
//! The "solver" applies uniformly random quarter turns until the cube happens
//! to be solved or the step cap is reached. It has no search and no
//! heuristic; it exists to produce a sequence of states to render.

use log::{debug, info};

use crate::core::{Algorithm, CubeRng, CubeState};

use super::config::DriverConfig;
use super::trajectory::Trajectory;

/// Apply `moves` random quarter turns to `cube` and return them.
pub fn scramble(cube: &mut CubeState, moves: usize, rng: &mut CubeRng) -> Algorithm {
    let alg: Algorithm = (0..moves).map(|_| rng.random_move()).collect();
    cube.apply_algorithm(&alg);
    debug!("scrambled with {alg}");
    alg
}

/// Random-move driver.
///
/// Scramble and solve draw from separate RNG streams, so changing
/// `max_steps` does not change the scramble for a given seed.
pub struct PseudoSolver {
    config: DriverConfig,
}

impl PseudoSolver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Scramble a fresh cube, then run the solve loop on it.
    pub fn run(&self) -> Trajectory {
        let rng = CubeRng::new(self.config.seed);
        self.run_with(&rng)
    }

    /// Run the solve loop on a caller-supplied cube without scrambling it.
    ///
    /// The caller's cube is not modified.
    pub fn run_from(&self, cube: &CubeState) -> Trajectory {
        let rng = CubeRng::new(self.config.seed);
        let mut solve_rng = rng.for_context("solve");
        let mut trajectory = Trajectory::new(self.config.seed, Algorithm::new());
        self.solve_loop(cube.duplicate(), &mut solve_rng, &mut trajectory);
        trajectory
    }

    /// Run `count` independent scramble + solve passes from forks of the
    /// configured seed.
    pub fn run_batch(&self, count: usize) -> Vec<Trajectory> {
        let mut root = CubeRng::new(self.config.seed);
        (0..count)
            .map(|_| {
                let fork = root.fork();
                self.run_with(&fork)
            })
            .collect()
    }

    fn run_with(&self, rng: &CubeRng) -> Trajectory {
        let seed = rng.state().seed;
        info!(
            "driver run: seed={seed} scramble_moves={} max_steps={}",
            self.config.scramble_moves, self.config.max_steps
        );

        let mut cube = CubeState::new();
        let mut scramble_rng = rng.for_context("scramble");
        let alg = scramble(&mut cube, self.config.scramble_moves, &mut scramble_rng);

        let mut solve_rng = rng.for_context("solve");
        let mut trajectory = Trajectory::new(seed, alg);
        self.solve_loop(cube, &mut solve_rng, &mut trajectory);
        trajectory
    }

    fn solve_loop(&self, mut cube: CubeState, rng: &mut CubeRng, trajectory: &mut Trajectory) {
        trajectory.record(None, &cube);

        let mut step = 0;
        while !cube.is_solved() && step < self.config.max_steps {
            let m = rng.random_move();
            cube.apply(m);
            step += 1;
            debug!("step {step}: {m}");
            trajectory.record(Some(m), &cube);
        }

        info!(
            "driver finished after {step} steps, solved={}",
            trajectory.solved
        );
    }
}
