//! Consistency checks for externally entered states.
//!
//! The engine itself accepts any colours; these checks are what an input
//! provider should run before handing a state to a solver.

use itertools::Itertools;
use thiserror::Error;

use crate::{cube::CubeState, notation::Face};

pub const COLOR_COUNT: u8 = 6;
pub const STICKERS_PER_COLOR: usize = 9;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid centres: duplicated colours {duplicated:?}, missing colours {missing:?}")]
    InvalidCenters {
        duplicated: Vec<u8>,
        missing: Vec<u8>,
    },
    #[error("Colour {color} at {face:?}[{row}][{col}] is outside 0..{limit}", limit = COLOR_COUNT)]
    OutOfRangeColor {
        color: u8,
        face: Face,
        row: usize,
        col: usize,
    },
    #[error(
        "Expected {expected} stickers of colour {color} but found {count}",
        expected = STICKERS_PER_COLOR
    )]
    WrongStickerCount { color: u8, count: usize },
}

impl CubeState {
    /// Check that the six centres are six distinct colours.
    ///
    /// # Errors
    ///
    /// Lists every duplicated and every missing centre colour.
    pub fn validate_centers(&self) -> Result<(), ValidationError> {
        let counts = Face::ALL.iter().map(|&face| self.center(face)).counts();

        let duplicated = counts
            .iter()
            .filter(|&(_, &n)| n > 1)
            .map(|(&color, _)| color)
            .sorted()
            .collect_vec();
        let missing = (0..COLOR_COUNT)
            .filter(|color| !counts.contains_key(color))
            .collect_vec();

        if duplicated.is_empty() && missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidCenters {
                duplicated,
                missing,
            })
        }
    }

    /// Check that every colour is in range and appears exactly nine times.
    ///
    /// # Errors
    ///
    /// Reports the first out-of-range sticker, or else the first colour with
    /// the wrong count.
    pub fn validate_sticker_counts(&self) -> Result<(), ValidationError> {
        let mut counts = [0; COLOR_COUNT as usize];
        for face in Face::ALL {
            for (row, cells) in self.face(face).iter().enumerate() {
                for (col, &color) in cells.iter().enumerate() {
                    let slot = counts.get_mut(usize::from(color)).ok_or(
                        ValidationError::OutOfRangeColor {
                            color,
                            face,
                            row,
                            col,
                        },
                    )?;
                    *slot += 1;
                }
            }
        }

        match counts
            .iter()
            .zip(0..)
            .find(|&(&count, _)| count != STICKERS_PER_COLOR)
        {
            Some((&count, color)) => Err(ValidationError::WrongStickerCount { color, count }),
            None => Ok(()),
        }
    }

    /// Stricter than [`CubeState::is_solved`]'s assumptions: distinct centres
    /// and nine stickers of each colour.
    ///
    /// # Errors
    ///
    /// See [`CubeState::validate_centers`] and
    /// [`CubeState::validate_sticker_counts`].
    pub fn is_valid_for_solving(&self) -> Result<(), ValidationError> {
        self.validate_centers()?;
        self.validate_sticker_counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrambled_cube_is_valid() {
        let mut cube = CubeState::solved();
        cube.scramble_with_rng(&mut fastrand::Rng::with_seed(99), 25);
        assert_eq!(cube.is_valid_for_solving(), Ok(()));
    }

    #[test]
    fn duplicate_centres() {
        let mut cube = CubeState::solved();
        cube.set(Face::D, 1, 1, 0);
        assert_eq!(
            cube.validate_centers(),
            Err(ValidationError::InvalidCenters {
                duplicated: vec![0],
                missing: vec![1],
            })
        );
    }

    #[test]
    fn monochrome_lookalike_is_solved_but_invalid() {
        let cube = CubeState::from_faces([[[2; 3]; 3]; 6]);
        assert!(cube.is_solved());
        assert!(cube.is_valid_for_solving().is_err());
    }

    #[test]
    fn sticker_counts() {
        let mut cube = CubeState::solved();
        cube.set(Face::U, 0, 0, 1);
        assert_eq!(
            cube.validate_sticker_counts(),
            Err(ValidationError::WrongStickerCount { color: 0, count: 8 })
        );

        cube.set(Face::U, 0, 0, 6);
        assert_eq!(
            cube.validate_sticker_counts(),
            Err(ValidationError::OutOfRangeColor {
                color: 6,
                face: Face::U,
                row: 0,
                col: 0,
            })
        );
    }
}
