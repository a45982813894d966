//! Error types for range expression parsing.
//!
//! Parsing fails in one of two ways, and callers usually need to tell them
//! apart to report something useful:
//!
//! - [`ParseError::MalformedPath`]: the input does not follow the path grammar.
//! - [`ParseError::InvalidParameters`]: the grammar matched, but the values are
//!   inconsistent (`min > max`, an average outside the range, a percentage
//!   above 100) or do not fit in an `i64`.

/// A result type defaulting to [`ParseError`].
pub type Result<T, E = ParseError> = core::result::Result<T, E>;

/// All possible errors produced while turning a path into a [`crate::RangeSpec`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The path does not match
    /// `/random-min-<min>-average-<average>&<percentage>-max-<max>`.
    #[error("malformed path: expected /random-min-<min>-average-<average>&<percentage>-max-<max>")]
    MalformedPath,

    /// The path is well formed but its values break a range constraint.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

impl ParseError {
    /// Returns `true` if the input failed the lexical check.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPath)
    }

    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidParameters { reason }
    }
}
