//! One chart request from birth details to a finished [`Kundli`].

use std::path::Path;
use std::time::Duration;

use kundli_chart::{ChartData, RenderOptions, render_svg, write_svg};
use kundli_config::{ChartConfig, KundliConfig};
use kundli_core::{Ephemeris, MeanElementEngine, ObservationContext};
use kundli_geo::{Geocoder, LocationQuery, OpenCageGeocoder};
use kundli_time::UtcTime;
use kundli_vedic_base::{
    AscendantMap, DashaSequence, GEMSTONES, Gemstone, PlanetPositions, YogaResult, ascendant_map,
    compute_positions, dasha_sequence, evaluate_yogas,
};
use log::{info, warn};

use crate::error::KundliError;

/// Birth details as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDetails {
    pub place: LocationQuery,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`, UTC.
    pub time: String,
}

impl BirthDetails {
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            place: LocationQuery::new(city, state),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Validated birth instant.
    pub fn birth_time(&self) -> Result<UtcTime, KundliError> {
        Ok(UtcTime::parse(&self.date, &self.time)?)
    }
}

/// Everything derived for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Kundli {
    pub context: ObservationContext,
    /// Place name reported by the lookup service, if any.
    pub place: Option<String>,
    pub positions: PlanetPositions,
    pub ascendants: AscendantMap,
    pub yogas: YogaResult,
    pub dasha: DashaSequence,
}

impl Kundli {
    /// Run every engine for an already-located context.
    pub fn compute<E: Ephemeris + ?Sized>(
        eph: &E,
        context: ObservationContext,
    ) -> Result<Self, KundliError> {
        let positions = compute_positions(eph, &context)?;
        let ascendants = ascendant_map(eph, &context)?;
        let yogas = evaluate_yogas(&positions);
        info!(
            "computed chart for {} ({} yoga(s))",
            context.time,
            yogas.triggered().len()
        );
        Ok(Self {
            context,
            place: None,
            positions,
            ascendants,
            yogas,
            dasha: dasha_sequence(),
        })
    }

    pub fn yoga_messages(&self) -> Vec<&'static str> {
        self.yogas.messages()
    }

    pub fn gemstones(&self) -> &'static [Gemstone] {
        &GEMSTONES
    }

    /// House numbers, ascendant signs and body placements.
    pub fn chart_data(&self) -> ChartData {
        ChartData::new()
            .with_house_numbers()
            .with_ascendants(&self.ascendants)
            .with_positions(&self.positions)
    }

    pub fn render_svg(&self, opts: &RenderOptions) -> Result<String, KundliError> {
        Ok(render_svg(&self.chart_data(), opts)?)
    }

    pub fn write_svg(&self, path: &Path, opts: &RenderOptions) -> Result<(), KundliError> {
        write_svg(path, &self.chart_data(), opts)?;
        info!("chart written to {}", path.display());
        Ok(())
    }
}

/// Rendering options from the `[chart]` config section.
pub fn render_options(chart: &ChartConfig) -> RenderOptions {
    let mut opts = RenderOptions {
        size_px: chart.size_px,
        ..RenderOptions::default()
    };
    if let Some(title) = &chart.title {
        opts.title = title.clone();
    }
    opts
}

/// Chart pipeline over a location source and a position engine.
#[derive(Debug, Clone)]
pub struct KundliGenerator<G, E> {
    geocoder: G,
    ephemeris: E,
}

impl KundliGenerator<OpenCageGeocoder, MeanElementEngine> {
    /// OpenCage lookup and the mean-element engine, configured from `config`.
    ///
    /// Fails with `MissingCredential` before anything else happens when no
    /// API key is configured.
    pub fn from_config(config: &KundliConfig) -> Result<Self, KundliError> {
        let key = config.require_api_key()?;
        let geocoder = OpenCageGeocoder::new(
            key,
            &config.geocoder.endpoint,
            Duration::from_secs(config.geocoder.timeout_secs),
        )?;
        Ok(Self::new(geocoder, MeanElementEngine::new()))
    }
}

impl<G: Geocoder, E: Ephemeris> KundliGenerator<G, E> {
    pub fn new(geocoder: G, ephemeris: E) -> Self {
        Self {
            geocoder,
            ephemeris,
        }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Full pipeline: validate time, locate, compute.
    ///
    /// An unknown place yields `LocationNotFound` without touching the
    /// position engine.
    pub fn generate(&self, details: &BirthDetails) -> Result<Kundli, KundliError> {
        let time = details.birth_time()?;
        let Some(coords) = self.geocoder.lookup(&details.place)? else {
            warn!("no location found for {}", details.place);
            return Err(KundliError::LocationNotFound {
                query: details.place.text(),
            });
        };
        info!(
            "{} resolved to ({:.4}, {:.4})",
            details.place, coords.latitude_deg, coords.longitude_deg
        );
        let context =
            ObservationContext::from_coordinates(time, coords.latitude_deg, coords.longitude_deg)?;
        let mut kundli = Kundli::compute(&self.ephemeris, context)?;
        kundli.place = coords.formatted;
        Ok(kundli)
    }

    /// Pipeline without location lookup.
    pub fn generate_at(
        &self,
        time: UtcTime,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Kundli, KundliError> {
        let context = ObservationContext::from_coordinates(time, latitude_deg, longitude_deg)?;
        Kundli::compute(&self.ephemeris, context)
    }
}
