use std::num::ParseIntError;

use thiserror::Error;

use crate::day11::MonkeyError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed input on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("not a number: {token:?}")]
    NotANumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Monkey(#[from] MonkeyError),

    #[error("no answer: {0}")]
    NoAnswer(&'static str),

    #[error("day {0} has no solver")]
    UnknownDay(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for [`Error::Malformed`]; `line` is 1-based.
pub fn malformed(line: usize, reason: impl Into<String>) -> Error {
    Error::Malformed { line, reason: reason.into() }
}
