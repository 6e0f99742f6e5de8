use log::trace;

use crate::{
    notation::{Axis, Face, InvalidMove, Move, MoveSequence, Target, Turn},
    tables::{self, Grid, GridTurn},
};

/// The facelet colours of a 3x3x3 cube, indexed by [`Face::index`], then row,
/// then column.
///
/// Colour indices are not checked for global consistency; see
/// [`crate::validate`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [Grid; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    pub fn solved() -> Self {
        CubeState {
            faces: std::array::from_fn(|i| [[i as u8; 3]; 3]),
        }
    }

    /// Wrap a grid supplied by an input provider (scanner, manual entry).
    pub fn from_faces(faces: [Grid; 6]) -> Self {
        CubeState { faces }
    }

    pub fn faces(&self) -> &[Grid; 6] {
        &self.faces
    }

    pub fn face(&self, face: Face) -> &Grid {
        &self.faces[face.index()]
    }

    pub fn get(&self, face: Face, row: usize, col: usize) -> u8 {
        self.faces[face.index()][row][col]
    }

    pub fn set(&mut self, face: Face, row: usize, col: usize, color: u8) {
        self.faces[face.index()][row][col] = color;
    }

    /// The reference colour of a face.
    pub fn center(&self, face: Face) -> u8 {
        self.get(face, 1, 1)
    }

    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    /// Whether every face is a single colour.
    ///
    /// Only per-face monochromicity is checked: two faces sharing a centre
    /// colour still count as solved. Use
    /// [`CubeState::is_valid_for_solving`] to also reject that.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().flatten().all(|&c| c == grid[1][1]))
    }

    /// Turn one face a quarter turn, clockwise as seen from outside the cube
    /// looking at that face.
    pub fn apply_quarter_turn(&mut self, face: Face, clockwise: bool) {
        let old = self.faces;

        let spin = if clockwise {
            GridTurn::Clockwise
        } else {
            GridTurn::CounterClockwise
        };
        self.faces[face.index()] = spin.apply(&old[face.index()]);

        for strip_move in tables::face_turn(face) {
            let (written, read) = if clockwise {
                (strip_move.written, strip_move.read)
            } else {
                (strip_move.read, strip_move.written)
            };

            let mut values = read.read(&old[read.face.index()]);
            if strip_move.flip {
                values.reverse();
            }
            written.write(&mut self.faces[written.face.index()], values);
        }
    }

    /// Reorient the whole cube without changing which stickers share a face.
    pub fn apply_whole_cube_rotation(&mut self, axis: Axis, clockwise: bool) {
        let old = self.faces;
        let rotation = tables::rotation(axis);

        for assignment in rotation.cycle {
            let (recipient, donor, transform) = if clockwise {
                (assignment.recipient, assignment.donor, assignment.transform)
            } else {
                (
                    assignment.donor,
                    assignment.recipient,
                    assignment.transform.inverse(),
                )
            };
            self.faces[recipient.index()] = transform.apply(&old[donor.index()]);
        }

        for (face, spin) in rotation.spins {
            let spin = if clockwise { spin } else { spin.inverse() };
            self.faces[face.index()] = spin.apply(&old[face.index()]);
        }
    }

    pub fn apply_move(&mut self, move_: Move) {
        trace!(target: "cube", "Applying {move_}");

        let quarter = |state: &mut Self, clockwise: bool| match move_.target {
            Target::Face(face) => state.apply_quarter_turn(face, clockwise),
            Target::Axis(axis) => state.apply_whole_cube_rotation(axis, clockwise),
        };

        match move_.turn {
            Turn::Clockwise => quarter(self, true),
            Turn::CounterClockwise => quarter(self, false),
            Turn::Half => {
                quarter(self, true);
                quarter(self, true);
            }
        }
    }

    pub fn apply_sequence(&mut self, moves: &MoveSequence) {
        for &move_ in moves {
            self.apply_move(move_);
        }
    }

    /// Parse and apply a move string token by token.
    ///
    /// Tokens before a bad token stay applied; snapshot the state first if the
    /// whole string must apply atomically.
    ///
    /// # Errors
    ///
    /// Returns the first token that fails to parse. That token is not applied.
    pub fn apply(&mut self, moves: &str) -> Result<(), InvalidMove> {
        for token in moves.split_whitespace() {
            self.apply_move(token.parse()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_solved() {
        let mut cube = CubeState::solved();
        cube.apply("R U F' D2 L B").unwrap();
        assert!(!cube.is_solved());
        cube.reset();
        assert!(cube.is_solved());
        assert_eq!(cube, CubeState::default());
    }

    #[test]
    fn f_on_solved_cube() {
        let mut cube = CubeState::solved();
        cube.apply("F").unwrap();

        assert_eq!(cube.face(Face::U), &[[0, 0, 0], [0, 0, 0], [4, 4, 4]]);
        assert_eq!(cube.face(Face::D), &[[5, 5, 5], [1, 1, 1], [1, 1, 1]]);
        assert_eq!(cube.face(Face::F), &[[2; 3]; 3]);
        assert_eq!(cube.face(Face::B), &[[3; 3]; 3]);
        assert_eq!(cube.face(Face::L), &[[4, 4, 1], [4, 4, 1], [4, 4, 1]]);
        assert_eq!(cube.face(Face::R), &[[0, 5, 5], [0, 5, 5], [0, 5, 5]]);
    }

    #[test]
    fn partial_application_stops_at_bad_token() {
        let mut cube = CubeState::solved();
        let err = cube.apply("R U3 F").unwrap_err();
        assert_eq!(err.token, "U3");

        let mut expected = CubeState::solved();
        expected.apply("R").unwrap();
        assert_eq!(cube, expected);
    }

    #[test]
    fn solved_check_ignores_duplicate_centers() {
        let cube = CubeState::from_faces([[[0; 3]; 3]; 6]);
        assert!(cube.is_solved());
    }

    #[test]
    fn rotations_keep_solved() {
        for axis in Axis::ALL {
            for clockwise in [true, false] {
                let mut cube = CubeState::solved();
                cube.apply_whole_cube_rotation(axis, clockwise);
                assert!(cube.is_solved(), "{axis:?}");
                assert_ne!(cube, CubeState::solved(), "{axis:?}");
            }
        }
    }

    #[test]
    fn y_moves_front_to_left() {
        let mut cube = CubeState::solved();
        cube.apply("Y").unwrap();
        assert_eq!(cube.center(Face::F), Face::R as u8);
        assert_eq!(cube.center(Face::L), Face::F as u8);
        assert_eq!(cube.center(Face::U), Face::U as u8);
    }
}
