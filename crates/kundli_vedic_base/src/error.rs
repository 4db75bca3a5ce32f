//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundli_core::{Body, EngineError};

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the position engine.
    Engine(EngineError),
    /// Right ascension outside [0, 2π] or not finite.
    InvalidAngle { body: Body, radians: f64 },
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::InvalidAngle { body, radians } => {
                write!(f, "invalid right ascension for {body}: {radians} rad")
            }
        }
    }
}

impl Error for VedicError {}

impl From<EngineError> for VedicError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}
