//! Error types for chart rendering.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
#[non_exhaustive]
pub enum ChartError {
    /// Writing into the SVG buffer failed.
    Format(std::fmt::Error),
    /// Writing the SVG file failed.
    Io(std::io::Error),
    InvalidOptions(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(e) => write!(f, "svg formatting error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidOptions(msg) => write!(f, "invalid render options: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidOptions(_) => None,
        }
    }
}

impl From<std::fmt::Error> for ChartError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Format(e)
    }
}

impl From<std::io::Error> for ChartError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
