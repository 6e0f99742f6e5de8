//! The 54-symbol facelet string exchanged with external two-phase solvers.
//!
//! Faces are listed in `U R F D L B` order, each row-major. Every symbol is
//! the letter of the face whose centre carries that sticker's colour, so a
//! solved cube reads `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::{cube::CubeState, notation::Face};

/// Face order of the facelet string.
pub const FACELET_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

pub const FACELET_COUNT: usize = 54;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error(
        "Colour {color} at {face:?}[{row}][{col}] does not match any centre; the cube state is likely mis-entered"
    )]
    UnmappableColor {
        color: u8,
        face: Face,
        row: usize,
        col: usize,
    },
    #[error("Facelet string must have {expected} symbols but has {0}", expected = FACELET_COUNT)]
    WrongLength(usize),
    #[error("Unknown facelet symbol `{symbol}` at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
}

impl CubeState {
    /// Serialize to the external solver's facelet string.
    ///
    /// When two faces share a centre colour, the face later in `U R F D L B`
    /// order names that colour.
    ///
    /// # Errors
    ///
    /// Fails with [`FaceletError::UnmappableColor`] if a sticker's colour is
    /// not the centre colour of any face.
    pub fn to_facelet_string(&self) -> Result<String, FaceletError> {
        let centers: HashMap<u8, Face> = FACELET_ORDER
            .iter()
            .map(|&face| (self.center(face), face))
            .collect();

        let mut out = String::with_capacity(FACELET_COUNT);
        for face in FACELET_ORDER {
            for (row, cells) in self.face(face).iter().enumerate() {
                for (col, &color) in cells.iter().enumerate() {
                    let symbol = centers.get(&color).ok_or(FaceletError::UnmappableColor {
                        color,
                        face,
                        row,
                        col,
                    })?;
                    out.push(symbol.letter());
                }
            }
        }

        debug!(target: "facelet", "Exported facelets {out}");
        Ok(out)
    }

    /// Read a facelet string back into a state, colouring each sticker with
    /// the solved-state colour of the face its symbol names.
    ///
    /// # Errors
    ///
    /// Fails if the string is not exactly 54 upper-case face letters.
    pub fn from_facelet_string(facelets: &str) -> Result<Self, FaceletError> {
        let symbols: Vec<char> = facelets.chars().collect();
        if symbols.len() != FACELET_COUNT {
            return Err(FaceletError::WrongLength(symbols.len()));
        }

        let mut cube = CubeState::solved();
        for (position, &symbol) in symbols.iter().enumerate() {
            let color = FACELET_ORDER
                .iter()
                .find(|face| face.letter() == symbol)
                .ok_or(FaceletError::UnknownSymbol { symbol, position })?
                .index() as u8;
            let face = FACELET_ORDER[position / 9];
            cube.set(face, position % 9 / 3, position % 3, color);
        }
        Ok(cube)
    }
}
