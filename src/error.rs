//! Crate-level error types.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// The camera's up vector is zero-length or non-finite, so the
    /// pole-safe basis rotation cannot be computed.
    DegenerateUpAxis,
    /// The input surface has a non-positive height, so pointer deltas
    /// cannot be normalized.
    EmptyViewport,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Browser DOM failure while attaching or detaching input listeners.
    Dom(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateUpAxis => {
                write!(f, "camera up vector is zero or non-finite")
            }
            Self::EmptyViewport => {
                write!(f, "input surface height must be positive")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
