//! Errors reported by the conversion and palette functions.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when converting or generating colors. Numeric
/// channel values are clamped instead of rejected, so only malformed hex
/// strings and structurally invalid arguments end up here.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A hex color string could not be parsed.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input, as given.
        input: String,
        /// What exactly is wrong with it.
        reason: FormatIssue,
    },

    /// A numeric argument makes the requested operation meaningless.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Constraint the argument violated.
        reason: &'static str,
    },
}

/// The ways a hex color string can be malformed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormatIssue {
    /// Nothing is left after the optional `#`.
    #[error("no hex digits")]
    Empty,
    /// The digits are valid but there are not exactly six of them.
    #[error("expected 6 hex digits, found {0}")]
    Length(usize),
    /// A character that is not a hex digit.
    #[error("unexpected character {0:?}")]
    NonHexDigit(char),
}

impl Error {
    pub(crate) fn invalid_format(input: &str, reason: FormatIssue) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
            reason,
        }
    }
}
