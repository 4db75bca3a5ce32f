//! Error types for location lookup.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lookup failures other than "not found".
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoError {
    /// Network or client-side failure.
    Transport(String),
    /// Service answered with a non-success HTTP status.
    Status { code: u16, message: String },
    /// Response body could not be decoded.
    Decode(String),
    InvalidConfig(&'static str),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status { code, message } => write!(f, "service returned {code}: {message}"),
            Self::Decode(msg) => write!(f, "cannot decode response: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid geocoder config: {msg}"),
        }
    }
}

impl Error for GeoError {}

impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
