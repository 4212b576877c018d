//! Solutions to the 2024 Advent of Code puzzles.
//!
//! Every day lives in its own module under [`days`] and exposes a single
//! `solve(part, input, settings)` function returning the answer as a string.

use std::fmt;
use std::str::FromStr;

pub mod config;
pub mod days;
pub mod error;
pub mod grid;
pub mod parsing;

pub use config::{InputSource, Settings};
pub use error::{PuzzleError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {One, Two}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];
}

impl FromStr for Part {
    type Err = PuzzleError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(PuzzleError::InvalidPart(other.to_owned())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {Part::One => "1", Part::Two => "2"})
    }
}

/// Solves one part of one day.
pub fn solve(day: usize, part: Part, input: &str, settings: &Settings) -> Result<String> {
    let solver = day.checked_sub(1).and_then(|i| days::SOLVERS.get(i)).ok_or(PuzzleError::UnknownDay(day))?;
    if input.trim().is_empty() {return Err(PuzzleError::malformed("empty input"))}
    solver(part, input, settings)
}
