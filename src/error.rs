//! Error types for selectable text.

use std::fmt;

/// Result type alias for selectable text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for selectable text operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Highlight range that is reversed or runs past the end of the text.
    InvalidRange { start: usize, end: usize, len: usize },
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end, len } => {
                write!(
                    f,
                    "invalid highlight range {start}..{end} for text of length {len}"
                )
            }
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
        }
    }
}

impl std::error::Error for Error {}
