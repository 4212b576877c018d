use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = PuzzleError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error("cannot parse {text:?} as a number")]
    BadNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("no '{0}' found in the map")]
    MissingMarker(char),
    #[error("no solution: {0}")]
    NoSolution(String),
    #[error("there is no puzzle for day {0}")]
    UnknownDay(usize),
    #[error("part must be 1 or 2, got {0:?}")]
    InvalidPart(String),
}

impl PuzzleError {
    pub(crate) fn malformed(what: impl std::fmt::Display) -> Self {
        PuzzleError::Malformed(what.to_string())
    }
}
