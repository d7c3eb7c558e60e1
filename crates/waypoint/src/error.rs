//! Error type shared by every solver in the crate.
//!
//! All failures are local and synchronous: a solver either returns a fully
//! computed, finite result or one of these variants. Nothing is retried.

use std::fmt;

/// Failure kinds surfaced by the numeric routines.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Zero points where at least one is required.
    EmptyInput,
    /// Two vectors (or a matrix and its expected shape) disagree in length.
    DimensionMismatch { expected: usize, found: usize },
    /// A start index lies beyond the point set.
    IndexOutOfRange { index: usize, len: usize },
    /// Back-substitution met a zero pivot or produced a non-finite unknown.
    SingularSystem,
    /// Non-positive tolerance, zero norm degree, unknown method code, ...
    InvalidParameter { reason: String },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input: at least one point is required"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} points")
            }
            Self::SingularSystem => write!(f, "singular system: non-finite solution"),
            Self::InvalidParameter { reason } => write!(f, "invalid parameter: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
