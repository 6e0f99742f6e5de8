//! State engine for a 3x3x3 cube: face turns, whole-cube rotations, move
//! notation, scrambling and the facelet string handed to external solvers.
//!
//! ```
//! use cube_core::CubeState;
//!
//! let mut cube = CubeState::solved();
//! cube.apply("R U R' U R U2 R'").unwrap();
//! cube.apply("R U2 R' U' R U' R'").unwrap();
//! assert!(cube.is_solved());
//! ```

pub mod cube;
pub mod facelet;
pub mod notation;
pub mod render;
pub mod scramble;
pub mod tables;
pub mod validate;

pub use cube::CubeState;
pub use facelet::FaceletError;
pub use notation::{Axis, Face, InvalidMove, Move, MoveSequence, Target, Turn, parse_moves};
pub use validate::ValidationError;
