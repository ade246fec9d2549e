use std::{error::Error, fmt, io};

/// The result type used across the line fitting crate.
pub type Result<T> = std::result::Result<T, FitError>;

/// Errors produced while loading data or building an optimizer.
///
/// Every variant describes invalid input and is fatal to the run; nothing in the
/// per-step loop produces one.
#[derive(Debug)]
pub enum FitError {
    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),

    /// Two sequences that must be paired have different lengths.
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "y values").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// A sample holds NaN or an infinity.
    NonFinite {
        /// 0-based position of the sample.
        index: usize,
    },

    /// A table cell could not be parsed as a number.
    MalformedCell {
        /// 1-based row in the source table, header included.
        row: usize,
        /// Header of the offending column.
        column: String,
        /// The cell as read, after trimming.
        value: String,
    },

    /// A table row holds a value in one column but not in the other.
    MissingCell {
        /// 1-based row in the source table, header included.
        row: usize,
        /// Header of the blank column.
        column: String,
    },

    /// The table could not be read as CSV.
    Csv(csv::Error),

    /// The table file could not be opened or read.
    Io(io::Error),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            FitError::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            FitError::NonFinite { index } => {
                write!(f, "invalid input: sample {index} is not a finite number")
            }
            FitError::MalformedCell { row, column, value } => write!(
                f,
                "invalid input: row {row}, column '{column}' holds '{value}' which is not a number"
            ),
            FitError::MissingCell { row, column } => {
                write!(f, "invalid input: row {row} has no value for column '{column}'")
            }
            FitError::Csv(e) => write!(f, "csv error: {e}"),
            FitError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for FitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FitError::Csv(e) => Some(e),
            FitError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FitError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for FitError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
