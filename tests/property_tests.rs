//! Property-based tests for cube rotations.
//!
//! These tests use proptest to check that the rotation laws hold from
//! arbitrary reachable states, not just from the solved cube.

use proptest::prelude::*;
use rubik_sim::{Algorithm, CubeState, Direction, FaceId, Move};

prop_compose! {
    fn arbitrary_move()(face in 0..6usize, clockwise in any::<bool>()) -> Move {
        Move::new(FaceId::ALL[face], Direction::from_clockwise(clockwise))
    }
}

prop_compose! {
    fn arbitrary_algorithm()(moves in prop::collection::vec(arbitrary_move(), 0..40)) -> Algorithm {
        Algorithm::from_moves(&moves)
    }
}

prop_compose! {
    fn arbitrary_cube()(alg in arbitrary_algorithm()) -> CubeState {
        let mut cube = CubeState::new();
        cube.apply_algorithm(&alg);
        cube
    }
}

proptest! {
    #[test]
    fn inverse_algorithm_restores(start in arbitrary_cube(), alg in arbitrary_algorithm()) {
        let mut cube = start.clone();
        cube.apply_algorithm(&alg);
        cube.apply_algorithm(&alg.inverse());
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn rotation_preserves_color_counts(start in arbitrary_cube(), m in arbitrary_move()) {
        let mut cube = start.clone();
        cube.apply(m);
        prop_assert_eq!(cube.color_counts(), start.color_counts());
    }

    #[test]
    fn four_turns_are_identity(start in arbitrary_cube(), m in arbitrary_move()) {
        let mut cube = start.clone();
        for _ in 0..4 {
            cube.apply(m);
        }
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn move_then_inverse_is_identity(start in arbitrary_cube(), m in arbitrary_move()) {
        let mut cube = start.clone();
        cube.apply(m);
        cube.apply(m.inverse());
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn center_cells_are_fixed(start in arbitrary_cube()) {
        for face in FaceId::ALL {
            prop_assert_eq!(start.face(face)[4], CubeState::new().face(face)[4]);
        }
    }

    #[test]
    fn cube_string_round_trips(cube in arbitrary_cube()) {
        let parsed: CubeState = cube.cube_string().parse().unwrap();
        prop_assert_eq!(parsed, cube);
    }

    #[test]
    fn notation_round_trips(alg in arbitrary_algorithm()) {
        let parsed = Algorithm::parse(&alg.to_string()).unwrap();
        prop_assert_eq!(parsed, alg);
    }
}
