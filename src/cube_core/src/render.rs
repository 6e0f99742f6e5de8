use std::fmt::Display;

use itertools::Itertools;

use crate::{cube::CubeState, notation::Face};

/// The sticker colours of the solved cube, in face order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    White = 0,
    Yellow = 1,
    Blue = 2,
    Green = 3,
    Red = 4,
    Orange = 5,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

/// The display letter of a colour index; `?` when out of range.
pub fn color_letter(index: u8) -> char {
    Color::from_index(index).map_or('?', Color::letter)
}

/// Lay the cube out as an unfolded net, styling each sticker with `sticker`.
///
/// ```text
///       U U U
///       ...
///
/// L L L  F F F  R R R  B B B
///
///       D D D
/// ```
pub fn render_net(cube: &CubeState, sticker: impl Fn(u8) -> String) -> String {
    let row = |face: Face, r: usize| cube.face(face)[r].iter().map(|&c| sticker(c)).join(" ");

    let mut lines = Vec::new();
    for r in 0..3 {
        lines.push(format!("      {}", row(Face::U, r)));
    }
    lines.push(String::new());
    for r in 0..3 {
        lines.push(
            [Face::L, Face::F, Face::R, Face::B]
                .into_iter()
                .map(|face| row(face, r))
                .join("  "),
        );
    }
    lines.push(String::new());
    for r in 0..3 {
        lines.push(format!("      {}", row(Face::D, r)));
    }
    lines.join("\n")
}

impl Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_net(self, |c| color_letter(c).to_string()))
    }
}
