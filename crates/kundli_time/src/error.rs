//! Error types for date/time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building or advancing a UTC timestamp.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date and time do not combine into a valid calendar timestamp.
    InvalidDateTime(String),
    /// Arithmetic left the representable calendar range.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateTime(msg) => write!(f, "invalid date/time: {msg}"),
            Self::OutOfRange => write!(f, "timestamp outside the supported calendar range"),
        }
    }
}

impl Error for TimeError {}
