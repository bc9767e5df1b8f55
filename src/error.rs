//! Error types for vmarquee.

use std::fmt;
use std::io;

/// Result type alias for vmarquee operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vmarquee operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Interactive mode requested but stdout is not a terminal.
    NotATerminal,
    /// Marquee text violates the printable-ASCII or length limits.
    InvalidText { len: usize, reason: &'static str },
    /// Invalid command-line value.
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NotATerminal => write!(f, "stdout is not a terminal"),
            Self::InvalidText { len, reason } => {
                write!(f, "invalid marquee text ({len} chars): {reason}")
            }
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
