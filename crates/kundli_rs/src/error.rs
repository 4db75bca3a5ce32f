//! Unified error type for the chart pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundli_chart::ChartError;
use kundli_config::ConfigError;
use kundli_core::EngineError;
use kundli_geo::GeoError;
use kundli_time::TimeError;
use kundli_vedic_base::VedicError;

/// Any failure of one chart request. Every variant aborts the request;
/// no partial chart is returned.
#[derive(Debug)]
#[non_exhaustive]
pub enum KundliError {
    /// No API key configured for location lookup.
    MissingCredential,
    /// The lookup service has no result for the query.
    LocationNotFound { query: String },
    InvalidDateTime(TimeError),
    /// Failure while deriving positions or ascendants.
    Computation(VedicError),
    /// Transport or service failure during location lookup.
    Geocoding(GeoError),
    Render(ChartError),
    Config(ConfigError),
}

impl Display for KundliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "{}", ConfigError::MissingCredential),
            Self::LocationNotFound { query } => {
                write!(f, "location not found: {query}; check the city and state")
            }
            Self::InvalidDateTime(e) => write!(f, "{e}"),
            Self::Computation(e) => write!(f, "chart computation failed: {e}"),
            Self::Geocoding(e) => write!(f, "location lookup failed: {e}"),
            Self::Render(e) => write!(f, "chart rendering failed: {e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for KundliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateTime(e) => Some(e),
            Self::Computation(e) => Some(e),
            Self::Geocoding(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::MissingCredential | Self::LocationNotFound { .. } => None,
        }
    }
}

impl From<TimeError> for KundliError {
    fn from(e: TimeError) -> Self {
        Self::InvalidDateTime(e)
    }
}

impl From<VedicError> for KundliError {
    fn from(e: VedicError) -> Self {
        Self::Computation(e)
    }
}

impl From<EngineError> for KundliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Time(t) => Self::InvalidDateTime(t),
            other => Self::Computation(VedicError::Engine(other)),
        }
    }
}

impl From<GeoError> for KundliError {
    fn from(e: GeoError) -> Self {
        Self::Geocoding(e)
    }
}

impl From<ChartError> for KundliError {
    fn from(e: ChartError) -> Self {
        Self::Render(e)
    }
}

impl From<ConfigError> for KundliError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::MissingCredential => Self::MissingCredential,
            other => Self::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_maps_from_config() {
        let e: KundliError = ConfigError::MissingCredential.into();
        assert!(matches!(e, KundliError::MissingCredential));
        assert!(e.to_string().contains("OPENCAGE_API_KEY"));
    }

    #[test]
    fn engine_time_error_is_invalid_datetime() {
        let e: KundliError = EngineError::Time(TimeError::OutOfRange).into();
        assert!(matches!(e, KundliError::InvalidDateTime(_)));
        let e: KundliError = EngineError::InvalidLocation("latitude out of range").into();
        assert!(matches!(e, KundliError::Computation(VedicError::Engine(_))));
    }

    #[test]
    fn not_found_names_query() {
        let e = KundliError::LocationNotFound {
            query: "Nowhereville, Atlantis".into(),
        };
        assert!(e.to_string().contains("Nowhereville, Atlantis"));
        assert!(e.source().is_none());
    }
}
