//! Location lookup: free-text "city, state" to latitude/longitude.
//!
//! [`Geocoder`] separates "no such place" (`Ok(None)`) from transport or
//! service failures (`Err`). [`OpenCageGeocoder`] is the HTTP implementation.

pub mod error;
pub mod opencage;

use std::collections::HashMap;

pub use error::GeoError;
pub use opencage::{OpenCageGeocoder, parse_response};

/// A place to look up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationQuery {
    pub city: String,
    pub state: String,
}

impl LocationQuery {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    /// Query text sent to the lookup service.
    pub fn text(&self) -> String {
        format!("{}, {}", self.city.trim(), self.state.trim())
    }

    pub fn is_blank(&self) -> bool {
        self.city.trim().is_empty() && self.state.trim().is_empty()
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// Resolved coordinates in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Place name as reported by the service, when available.
    pub formatted: Option<String>,
}

/// Source of coordinates for a free-text place.
pub trait Geocoder {
    /// `Ok(None)` when the place is unknown.
    fn lookup(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeoError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn lookup(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeoError> {
        (**self).lookup(query)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn lookup(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeoError> {
        (**self).lookup(query)
    }
}

/// In-memory table of known places, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, Coordinates>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(
        mut self,
        query: &LocationQuery,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        self.places.insert(
            Self::key(query),
            Coordinates {
                latitude_deg,
                longitude_deg,
                formatted: Some(query.text()),
            },
        );
        self
    }

    fn key(query: &LocationQuery) -> String {
        query.text().to_lowercase()
    }
}

impl Geocoder for StaticGeocoder {
    fn lookup(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeoError> {
        Ok(self.places.get(&Self::key(query)).cloned())
    }
}
