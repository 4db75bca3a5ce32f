//! Birth-chart pipeline.
//!
//! Ties the lower crates together: a [`Geocoder`] resolves the birth place,
//! an [`Ephemeris`] places the nine bodies, and the Vedic tables and chart
//! renderer turn that into a [`Kundli`].
//!
//! ```rust,ignore
//! use kundli_rs::*;
//!
//! let config = KundliConfig::resolve(None)?;
//! let generator = KundliGenerator::from_config(&config)?;
//! let details = BirthDetails::new("Pune", "Maharashtra", "1990-08-15", "06:30");
//! let kundli = generator.generate(&details)?;
//! for msg in kundli.yoga_messages() {
//!     println!("{msg}");
//! }
//! kundli.write_svg("kundli.svg".as_ref(), &render_options(&config.chart))?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::KundliError;
pub use pipeline::{BirthDetails, Kundli, KundliGenerator, render_options};

// Re-exports so callers only need this crate.
pub use kundli_chart::{ChartData, RenderOptions};
pub use kundli_config::KundliConfig;
pub use kundli_core::{
    ALL_BODIES, Body, Ephemeris, GeoLocation, MeanElementEngine, ObservationContext,
};
pub use kundli_geo::{Coordinates, Geocoder, LocationQuery, OpenCageGeocoder, StaticGeocoder};
pub use kundli_time::UtcTime;
pub use kundli_vedic_base::{
    AscendantMap, DashaSequence, GEMSTONES, Gemstone, PlanetPosition, PlanetPositions, Rashi,
    YogaResult,
};
