//! Die faces and their visual lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidGuess;

/// One face of a six-sided die.
///
/// Serializes as its numeric value (`1..=6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Face {
    /// Face showing one pip.
    One = 1,
    /// Face showing two pips.
    Two = 2,
    /// Face showing three pips.
    Three = 3,
    /// Face showing four pips.
    Four = 4,
    /// Face showing five pips.
    Five = 5,
    /// Face showing six pips.
    Six = 6,
}

/// Pip layout of a face on a 3x3 grid, row-major.
pub type PipGrid = [[bool; 3]; 3];

const X: bool = true;
const O: bool = false;

/// Visual lookup, indexed by `value - 1`.
const PIPS: [PipGrid; 6] = [
    [[O, O, O], [O, X, O], [O, O, O]],
    [[X, O, O], [O, O, O], [O, O, X]],
    [[X, O, O], [O, X, O], [O, O, X]],
    [[X, O, X], [O, O, O], [X, O, X]],
    [[X, O, X], [O, X, O], [X, O, X]],
    [[X, O, X], [X, O, X], [X, O, X]],
];

const NAMES: [&str; 6] = ["One", "Two", "Three", "Four", "Five", "Six"];

impl Face {
    /// All faces in ascending order.
    pub const ALL: [Face; 6] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Convert a numeric value to a face.
    ///
    /// Returns `None` outside `1..=6`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Face::One),
            2 => Some(Face::Two),
            3 => Some(Face::Three),
            4 => Some(Face::Four),
            5 => Some(Face::Five),
            6 => Some(Face::Six),
            _ => None,
        }
    }

    /// Numeric value of the face (`1..=6`).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn index(self) -> usize {
        self as usize - 1
    }

    /// Human-readable name ("One" through "Six").
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Pip layout used to draw this face.
    #[must_use]
    pub const fn pips(self) -> PipGrid {
        PIPS[self.index()]
    }

    /// Parse a guess as typed by the user.
    ///
    /// Surrounding whitespace is ignored; the rest must be a decimal integer
    /// in `1..=6`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGuess`] if the text is not an integer or is out of range.
    pub fn parse_guess(raw: &str) -> Result<Self, InvalidGuess> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(|n| u8::try_from(n).ok())
            .and_then(Self::from_value)
            .ok_or_else(|| InvalidGuess::new(raw))
    }
}

impl FromStr for Face {
    type Err = InvalidGuess;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_guess(s)
    }
}

impl TryFrom<u8> for Face {
    type Error = InvalidGuess;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| InvalidGuess::new(value.to_string()))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.value()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
