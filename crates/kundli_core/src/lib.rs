//! Observation context, tracked bodies and the position-engine seam.
//!
//! This crate provides the [`Ephemeris`] trait that every chart calculation
//! goes through, plus [`MeanElementEngine`], a simplified mean-orbital-element
//! model. A full almanac can be plugged in behind the same trait without
//! touching house, sign or interpretation logic.

pub mod elements;
pub mod engine;

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundli_time::{TimeError, UtcTime};

pub use engine::MeanElementEngine;

/// The nine bodies tracked by a chart.
///
/// Rahu and Ketu are the lunar nodes. They are synthetic points on the
/// ecliptic, not orbiting bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine bodies in chart order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter label used inside chart cells.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sun => "Su",
            Self::Moon => "Mo",
            Self::Mars => "Ma",
            Self::Mercury => "Me",
            Self::Jupiter => "Ju",
            Self::Venus => "Ve",
            Self::Saturn => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EngineError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EngineError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EngineError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// Instant and place of observation for one chart.
///
/// Immutable: advancing the clock yields a new context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationContext {
    pub time: UtcTime,
    pub location: GeoLocation,
}

impl ObservationContext {
    pub fn new(time: UtcTime, location: GeoLocation) -> Self {
        Self { time, location }
    }

    /// Validate raw coordinates and pair them with `time`.
    pub fn from_coordinates(
        time: UtcTime,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(time, GeoLocation::new(latitude_deg, longitude_deg)?))
    }

    /// Copy of this context with the clock moved by `hours`.
    pub fn advanced_by_hours(&self, hours: i64) -> Result<Self, EngineError> {
        Ok(Self {
            time: self.time.plus_hours(hours)?,
            location: self.location,
        })
    }

    /// Julian Date (UTC) of the observation instant.
    pub fn jd(&self) -> f64 {
        self.time.to_jd()
    }
}

/// Apparent geocentric direction of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPosition {
    /// Right ascension in radians, range [0, 2π).
    pub right_ascension_rad: f64,
    /// Declination in radians.
    pub declination_rad: f64,
    /// Ecliptic longitude in degrees, range [0, 360).
    pub ecliptic_longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub ecliptic_latitude_deg: f64,
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidLocation(&'static str),
    Time(TimeError),
    /// A coordinate came out NaN or infinite.
    NonFinite { body: Body },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NonFinite { body } => write!(f, "non-finite coordinate computed for {body}"),
        }
    }
}

impl Error for EngineError {}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Source of body positions.
///
/// The only astronomical question the chart logic asks: where is body `B`
/// at the instant and place in `ctx`?
pub trait Ephemeris {
    fn apparent_position(
        &self,
        body: Body,
        ctx: &ObservationContext,
    ) -> Result<ApparentPosition, EngineError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn apparent_position(
        &self,
        body: Body,
        ctx: &ObservationContext,
    ) -> Result<ApparentPosition, EngineError> {
        (**self).apparent_position(body, ctx)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn apparent_position(
        &self,
        body: Body,
        ctx: &ObservationContext,
    ) -> Result<ApparentPosition, EngineError> {
        (**self).apparent_position(body, ctx)
    }
}
