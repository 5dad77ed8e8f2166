//! Error types shared by the matrix builder and the instance reader.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while turning input into a solvable matrix.
///
/// Searching itself never fails; once a [`DancingLinks`] exists every
/// outcome (no solution, one, many) is a valid answer.
///
/// [`DancingLinks`]: crate::DancingLinks
#[derive(Debug, Error)]
pub enum Error {
    /// The rows handed to the builder disagree with the declared columns.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    /// A textual instance could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A generator or builder parameter is outside its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reading an instance failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The ways a row can fail to fit the declared column universe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("row {row} references column {column}, outside 0..{column_count}")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        column_count: usize,
    },
    #[error("row {row} has {found} entries, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row id {row} appears more than once")]
    DuplicateRow { row: usize },
    #[error("{column_count} columns do not fit in memory")]
    TooManyColumns { column_count: usize },
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns the builder-level cause, if this is a malformed-input error.
    pub fn as_malformed(&self) -> Option<&MalformedInput> {
        match self {
            Error::MalformedInput(inner) => Some(inner),
            _ => None,
        }
    }
}
