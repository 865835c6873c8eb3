//! Error taxonomy for sequence queries.
//!
//! Every fallible operator in this crate returns [`Result<T>`], whose error
//! type is [`QueryError`]. Errors are raised synchronously at the point the
//! violation is detected: argument checks happen when a chain is built, lookup
//! failures happen while a terminal operator is pulling elements.

use thiserror::Error;

/// Canonical result for query operators.
pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A size, count or index argument violates its constraint.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A positional lookup went past the end of the sequence.
    #[error("index {index} is out of range for a sequence of {len} elements")]
    OutOfRange { index: usize, len: usize },

    /// No element satisfies a required predicate.
    #[error("no element satisfies the predicate")]
    NotFound,

    /// More than one element satisfies a uniqueness-required predicate.
    #[error("more than one element satisfies the predicate")]
    Ambiguous,
}

impl QueryError {
    pub(crate) fn invalid_argument<S: Into<String>>(name: &'static str, reason: S) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Short, stable name of the error kind (`"InvalidArgument"`, `"OutOfRange"`, ...).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::OutOfRange { .. } => "OutOfRange",
            Self::NotFound => "NotFound",
            Self::Ambiguous => "Ambiguous",
        }
    }
}
