//! Static facelet permutation tables for face turns and whole-cube rotations.
//!
//! These tables are the single geometric source of truth; the engine in
//! [`crate::cube`] only interprets them.

use crate::notation::{Axis, Face};

/// A 3x3 grid of colour indices, row-major, as seen from outside the cube.
pub type Grid = [[u8; 3]; 3];

/// A full row or column of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// A one-cell-deep border strip on a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub line: Line,
}

impl Strip {
    const fn row(face: Face, row: usize) -> Self {
        Strip {
            face,
            line: Line::Row(row),
        }
    }

    const fn col(face: Face, col: usize) -> Self {
        Strip {
            face,
            line: Line::Col(col),
        }
    }

    /// Read the strip from a grid, top-to-bottom or left-to-right.
    pub fn read(self, grid: &Grid) -> [u8; 3] {
        match self.line {
            Line::Row(r) => grid[r],
            Line::Col(c) => [grid[0][c], grid[1][c], grid[2][c]],
        }
    }

    pub fn write(self, grid: &mut Grid, values: [u8; 3]) {
        match self.line {
            Line::Row(r) => grid[r] = values,
            Line::Col(c) => {
                for (row, value) in grid.iter_mut().zip(values) {
                    row[c] = value;
                }
            }
        }
    }
}

/// One entry of a face turn's border cycle: on a clockwise turn, `written`
/// receives the old contents of `read`, reversed when `flip` is set.
#[derive(Debug, Copy, Clone)]
pub struct StripMove {
    pub written: Strip,
    pub read: Strip,
    pub flip: bool,
}

const fn strip_move(written: Strip, read: Strip, flip: bool) -> StripMove {
    StripMove {
        written,
        read,
        flip,
    }
}

/// Border cycles for a clockwise quarter turn, indexed by [`Face::index`].
pub const FACE_TURNS: [[StripMove; 4]; 6] = {
    use Face::*;
    use Strip as S;

    [
        // U
        [
            strip_move(S::row(F, 0), S::row(R, 0), false),
            strip_move(S::row(R, 0), S::row(B, 0), false),
            strip_move(S::row(B, 0), S::row(L, 0), false),
            strip_move(S::row(L, 0), S::row(F, 0), false),
        ],
        // D
        [
            strip_move(S::row(F, 2), S::row(L, 2), false),
            strip_move(S::row(L, 2), S::row(B, 2), false),
            strip_move(S::row(B, 2), S::row(R, 2), false),
            strip_move(S::row(R, 2), S::row(F, 2), false),
        ],
        // F
        [
            strip_move(S::row(U, 2), S::col(L, 2), true),
            strip_move(S::col(L, 2), S::row(D, 0), false),
            strip_move(S::row(D, 0), S::col(R, 0), true),
            strip_move(S::col(R, 0), S::row(U, 2), false),
        ],
        // B
        [
            strip_move(S::row(U, 0), S::col(R, 2), false),
            strip_move(S::col(R, 2), S::row(D, 2), true),
            strip_move(S::row(D, 2), S::col(L, 0), false),
            strip_move(S::col(L, 0), S::row(U, 0), true),
        ],
        // L
        [
            strip_move(S::col(U, 0), S::col(B, 2), true),
            strip_move(S::col(B, 2), S::col(D, 0), true),
            strip_move(S::col(D, 0), S::col(F, 0), false),
            strip_move(S::col(F, 0), S::col(U, 0), false),
        ],
        // R
        [
            strip_move(S::col(U, 2), S::col(F, 2), false),
            strip_move(S::col(F, 2), S::col(D, 2), false),
            strip_move(S::col(D, 2), S::col(B, 0), true),
            strip_move(S::col(B, 0), S::col(U, 2), true),
        ],
    ]
};

/// A rigid rotation of a single 3x3 grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridTurn {
    Identity,
    Clockwise,
    CounterClockwise,
    Half,
}

impl GridTurn {
    pub fn inverse(self) -> Self {
        match self {
            GridTurn::Identity => GridTurn::Identity,
            GridTurn::Clockwise => GridTurn::CounterClockwise,
            GridTurn::CounterClockwise => GridTurn::Clockwise,
            GridTurn::Half => GridTurn::Half,
        }
    }

    pub fn apply(self, grid: &Grid) -> Grid {
        let mut out = *grid;
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = match self {
                    GridTurn::Identity => grid[i][j],
                    GridTurn::Clockwise => grid[2 - j][i],
                    GridTurn::CounterClockwise => grid[j][2 - i],
                    GridTurn::Half => grid[2 - i][2 - j],
                };
            }
        }
        out
    }
}

/// One face slot of a whole-cube rotation: on a clockwise rotation,
/// `recipient` receives `transform` applied to the old grid of `donor`.
#[derive(Debug, Copy, Clone)]
pub struct FaceAssignment {
    pub recipient: Face,
    pub donor: Face,
    pub transform: GridTurn,
}

#[derive(Debug, Copy, Clone)]
pub struct Rotation {
    /// The four faces that change places.
    pub cycle: [FaceAssignment; 4],
    /// The two faces pierced by the axis, which stay put but spin.
    pub spins: [(Face, GridTurn); 2],
}

const fn assign(recipient: Face, donor: Face, transform: GridTurn) -> FaceAssignment {
    FaceAssignment {
        recipient,
        donor,
        transform,
    }
}

/// Clockwise whole-cube rotations, indexed by `Axis as usize`.
pub const ROTATIONS: [Rotation; 3] = {
    use Face::*;
    use GridTurn::*;

    [
        // X
        Rotation {
            cycle: [
                assign(F, D, Identity),
                assign(D, B, Half),
                assign(B, U, Half),
                assign(U, F, Identity),
            ],
            spins: [(R, Clockwise), (L, CounterClockwise)],
        },
        // Y
        Rotation {
            cycle: [
                assign(F, R, Identity),
                assign(R, B, Identity),
                assign(B, L, Identity),
                assign(L, F, Identity),
            ],
            spins: [(U, Clockwise), (D, CounterClockwise)],
        },
        // Z
        Rotation {
            cycle: [
                assign(U, L, CounterClockwise),
                assign(L, D, CounterClockwise),
                assign(D, R, CounterClockwise),
                assign(R, U, CounterClockwise),
            ],
            spins: [(F, Clockwise), (B, CounterClockwise)],
        },
    ]
};

pub fn face_turn(face: Face) -> &'static [StripMove; 4] {
    &FACE_TURNS[face.index()]
}

pub fn rotation(axis: Axis) -> &'static Rotation {
    &ROTATIONS[axis as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERED: Grid = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

    #[test]
    fn grid_turns() {
        assert_eq!(
            GridTurn::Clockwise.apply(&NUMBERED),
            [[6, 3, 0], [7, 4, 1], [8, 5, 2]]
        );
        assert_eq!(
            GridTurn::CounterClockwise.apply(&NUMBERED),
            [[2, 5, 8], [1, 4, 7], [0, 3, 6]]
        );
        assert_eq!(
            GridTurn::Half.apply(&NUMBERED),
            [[8, 7, 6], [5, 4, 3], [2, 1, 0]]
        );
        for turn in [
            GridTurn::Identity,
            GridTurn::Clockwise,
            GridTurn::CounterClockwise,
            GridTurn::Half,
        ] {
            assert_eq!(turn.inverse().apply(&turn.apply(&NUMBERED)), NUMBERED);
        }
    }

    #[test]
    fn strips_read_and_write() {
        let mut grid = NUMBERED;
        assert_eq!(Strip::row(Face::U, 2).read(&grid), [6, 7, 8]);
        assert_eq!(Strip::col(Face::U, 2).read(&grid), [2, 5, 8]);

        Strip::col(Face::U, 0).write(&mut grid, [9, 9, 9]);
        assert_eq!(grid, [[9, 1, 2], [9, 4, 5], [9, 7, 8]]);
    }

    #[test]
    fn face_turn_cycles_are_closed() {
        for face in Face::ALL {
            let cycle = face_turn(face);
            for (i, entry) in cycle.iter().enumerate() {
                // Each strip is read by the entry that writes the next one.
                assert_eq!(entry.read, cycle[(i + 1) % 4].written, "{face:?}");
                assert_ne!(entry.written.face, face);
            }
            // An odd number of reversals would give the turn order 8.
            assert_eq!(cycle.iter().filter(|e| e.flip).count() % 2, 0, "{face:?}");
        }
    }

    #[test]
    fn rotations_cover_every_face_once() {
        for axis in Axis::ALL {
            let rotation = rotation(axis);
            let mut seen = [0; 6];
            for assignment in rotation.cycle {
                seen[assignment.recipient.index()] += 1;
            }
            for (face, _) in rotation.spins {
                seen[face.index()] += 1;
            }
            assert_eq!(seen, [1; 6], "{axis:?}");
        }
    }
}
