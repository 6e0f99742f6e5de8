//! Move notation: faces, axes, turns and whitespace-separated move strings.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

/// A face of the cube. The discriminant is the face's index into the cube
/// state and also its colour index in the solved state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    U = 0,
    D = 1,
    F = 2,
    B = 3,
    L = 4,
    R = 5,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, D, F, B, L, R];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    /// Case-insensitive lookup of a face by its letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }
}

/// An axis of whole-cube rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            _ => None,
        }
    }
}

/// What a move acts on: a single face layer or the whole cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Face(Face),
    Axis(Axis),
}

impl Target {
    fn from_letter(letter: char) -> Option<Self> {
        Face::from_letter(letter)
            .map(Target::Face)
            .or_else(|| Axis::from_letter(letter).map(Target::Axis))
    }

    fn letter(self) -> char {
        match self {
            Target::Face(face) => face.letter(),
            Target::Axis(axis) => axis.letter(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    /// Two clockwise quarter turns.
    Half,
}

impl Turn {
    pub const ALL: [Self; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub target: Target,
    pub turn: Turn,
}

impl Move {
    pub fn face(face: Face, turn: Turn) -> Self {
        Move {
            target: Target::Face(face),
            turn,
        }
    }

    pub fn rotation(axis: Axis, turn: Turn) -> Self {
        Move {
            target: Target::Axis(axis),
            turn,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Move {
            target: self.target,
            turn: self.turn.inverse(),
        }
    }
}

/// Why a token failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    Empty,
    UnknownTarget(char),
    UnknownModifier(char),
    TooLong,
}

impl Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::Empty => f.write_str("empty token"),
            InvalidMoveReason::UnknownTarget(c) => write!(f, "unknown face/axis letter `{c}`"),
            InvalidMoveReason::UnknownModifier(c) => write!(f, "unknown modifier `{c}`"),
            InvalidMoveReason::TooLong => f.write_str("token too long"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid move `{token}`: {reason}")]
pub struct InvalidMove {
    pub token: String,
    pub reason: InvalidMoveReason,
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InvalidMove {
            token: token.to_owned(),
            reason,
        };

        let mut chars = token.chars();
        // An empty token never comes out of `split_whitespace`, but `Move` can
        // also be parsed directly.
        let first = chars
            .next()
            .ok_or_else(|| invalid(InvalidMoveReason::Empty))?;
        let target = Target::from_letter(first)
            .ok_or_else(|| invalid(InvalidMoveReason::UnknownTarget(first)))?;

        let modifier = chars.next();
        if chars.next().is_some() {
            return Err(invalid(InvalidMoveReason::TooLong));
        }

        let turn = match modifier {
            None => Turn::Clockwise,
            Some('\'') => Turn::CounterClockwise,
            Some('2') => Turn::Half,
            Some(c) => return Err(invalid(InvalidMoveReason::UnknownModifier(c))),
        };

        Ok(Move { target, turn })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.target.letter(), self.turn.suffix())
    }
}

/// An ordered list of moves, applied left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        MoveSequence(self.0.iter().rev().map(|m| m.inverse()).collect())
    }
}

impl FromStr for MoveSequence {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_moves(s)
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveSequence(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parse a whitespace-separated move string. Fails on the first bad token.
///
/// # Errors
///
/// Returns [`InvalidMove`] naming the first token that is not a face or axis
/// letter optionally followed by `'` or `2`.
pub fn parse_moves(s: &str) -> Result<MoveSequence, InvalidMove> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_modifier() {
        let seq = parse_moves("R U' F2 x y' z2").unwrap();
        assert_eq!(
            seq.moves(),
            &[
                Move::face(Face::R, Turn::Clockwise),
                Move::face(Face::U, Turn::CounterClockwise),
                Move::face(Face::F, Turn::Half),
                Move::rotation(Axis::X, Turn::Clockwise),
                Move::rotation(Axis::Y, Turn::CounterClockwise),
                Move::rotation(Axis::Z, Turn::Half),
            ]
        );
    }

    #[test]
    fn leading_letter_is_case_insensitive() {
        assert_eq!(parse_moves("r").unwrap(), parse_moves("R").unwrap());
        assert_eq!(parse_moves("X2").unwrap(), parse_moves("x2").unwrap());
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        let seq = parse_moves("  R\tU \n R'  ").unwrap();
        assert_eq!(seq.len(), 3);
        assert!(parse_moves("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_tokens() {
        let err = parse_moves("R A U").unwrap_err();
        assert_eq!(err.token, "A");
        assert_eq!(err.reason, InvalidMoveReason::UnknownTarget('A'));

        let err = parse_moves("U3").unwrap_err();
        assert_eq!(err.reason, InvalidMoveReason::UnknownModifier('3'));

        let err = parse_moves("F'2").unwrap_err();
        assert_eq!(err.token, "F'2");
        assert_eq!(err.reason, InvalidMoveReason::TooLong);

        // The letter is checked before the length.
        let err = parse_moves("A12").unwrap_err();
        assert_eq!(err.reason, InvalidMoveReason::UnknownTarget('A'));
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = "".parse::<Move>().unwrap_err();
        assert_eq!(err.reason, InvalidMoveReason::Empty);
        assert_eq!(err.to_string(), "Invalid move ``: empty token");
    }

    #[test]
    fn error_message_names_the_token() {
        let err = parse_moves("U3").unwrap_err();
        assert_eq!(err.to_string(), "Invalid move `U3`: unknown modifier `3`");
    }

    #[test]
    fn display_is_canonical() {
        let seq = parse_moves("r u' f2 X").unwrap();
        assert_eq!(seq.to_string(), "R U' F2 X");
        assert_eq!(seq.to_string().parse::<MoveSequence>().unwrap(), seq);
    }

    #[test]
    fn inverse_reverses_and_inverts() {
        let seq = parse_moves("R U2 F' y").unwrap();
        assert_eq!(seq.inverse().to_string(), "Y' F U2 R'");
        assert_eq!(seq.inverse().inverse(), seq);
    }
}
