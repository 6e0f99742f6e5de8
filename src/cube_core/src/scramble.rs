use log::debug;

use crate::{
    cube::CubeState,
    notation::{Face, Move, MoveSequence, Turn},
};

/// Draw `count` independent face turns.
///
/// Faces and modifiers are uniform and independent, so consecutive moves may
/// share a face or cancel outright. Whole-cube rotations are never drawn.
pub fn random_moves(rng: &mut fastrand::Rng, count: usize) -> MoveSequence {
    (0..count)
        .map(|_| {
            let face = Face::ALL[rng.usize(..Face::ALL.len())];
            let turn = Turn::ALL[rng.usize(..Turn::ALL.len())];
            Move::face(face, turn)
        })
        .collect()
}

impl CubeState {
    /// Apply `count` random face turns and return what was applied.
    pub fn scramble(&mut self, count: usize) -> MoveSequence {
        self.scramble_with_rng(&mut fastrand::Rng::new(), count)
    }

    pub fn scramble_with_rng(&mut self, rng: &mut fastrand::Rng, count: usize) -> MoveSequence {
        let moves = random_moves(rng, count);
        debug!(target: "scramble", "Scrambling with {count} moves: {moves}");
        self.apply_sequence(&moves);
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Target;

    #[test]
    fn scramble_has_requested_length_and_no_rotations() {
        let mut cube = CubeState::solved();
        let moves = cube.scramble(40);
        assert_eq!(moves.len(), 40);
        assert!(
            moves
                .moves()
                .iter()
                .all(|m| matches!(m.target, Target::Face(_)))
        );
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let mut a = CubeState::solved();
        let mut b = CubeState::solved();
        let moves_a = a.scramble_with_rng(&mut fastrand::Rng::with_seed(7), 25);
        let moves_b = b.scramble_with_rng(&mut fastrand::Rng::with_seed(7), 25);
        assert_eq!(moves_a, moves_b);
        assert_eq!(a, b);
    }

    #[test]
    fn scramble_matches_its_move_string() {
        let mut scrambled = CubeState::solved();
        let moves = scrambled.scramble_with_rng(&mut fastrand::Rng::with_seed(1234), 30);

        let mut replayed = CubeState::solved();
        replayed.apply(&moves.to_string()).unwrap();
        assert_eq!(scrambled, replayed);
    }

    #[test]
    fn zero_moves_is_a_no_op() {
        let mut cube = CubeState::solved();
        assert!(cube.scramble(0).is_empty());
        assert!(cube.is_solved());
    }
}
