//! Position engine: house, sign and degree for each tracked body.

use kundli_core::{ALL_BODIES, Body, Ephemeris, ObservationContext};
use log::debug;

use crate::bhava::house_from_right_ascension;
use crate::error::VedicError;
use crate::rashi::{Rashi, rashi_from_longitude};

/// Placement of one body in the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub body: Body,
    /// House in [1, 12].
    pub house: u8,
    pub sign: Rashi,
    /// Right ascension in degrees, rounded to 2 decimals, in [0, 360).
    pub degree: f64,
}

impl PlanetPosition {
    /// Sign label as shown on the chart.
    pub fn sign_name(&self) -> &'static str {
        self.sign.western_name()
    }
}

/// Placements for one chart, in [`kundli_core::ALL_BODIES`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPositions {
    entries: Vec<PlanetPosition>,
}

impl PlanetPositions {
    pub fn new(entries: Vec<PlanetPosition>) -> Self {
        Self { entries }
    }

    pub fn get(&self, body: Body) -> Option<&PlanetPosition> {
        self.entries.iter().find(|p| p.body == body)
    }

    pub fn house_of(&self, body: Body) -> Option<u8> {
        self.get(body).map(|p| p.house)
    }

    /// Bodies placed in `house`, in chart order.
    pub fn bodies_in_house(&self, house: u8) -> Vec<Body> {
        self.entries
            .iter()
            .filter(|p| p.house == house)
            .map(|p| p.body)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlanetPositions {
    type Item = &'a PlanetPosition;
    type IntoIter = std::slice::Iter<'a, PlanetPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Radians to degrees rounded to 2 decimals, kept inside [0, 360).
pub fn round_degree(ra_rad: f64) -> f64 {
    let deg = (ra_rad.to_degrees() * 100.0).round() / 100.0;
    if deg >= 360.0 { 0.0 } else { deg }
}

/// Compute the placement of all nine bodies at `ctx`.
///
/// Fails on the first body the engine cannot place; no partial result
/// is returned.
pub fn compute_positions<E: Ephemeris + ?Sized>(
    eph: &E,
    ctx: &ObservationContext,
) -> Result<PlanetPositions, VedicError> {
    let mut entries = Vec::with_capacity(ALL_BODIES.len());
    for body in ALL_BODIES {
        let pos = eph.apparent_position(body, ctx)?;
        let house = house_from_right_ascension(body, pos.right_ascension_rad)?;
        let sign = rashi_from_longitude(pos.ecliptic_longitude_deg);
        let degree = round_degree(pos.right_ascension_rad);
        debug!("{body}: house {house}, {sign}, {degree:.2} deg");
        entries.push(PlanetPosition {
            body,
            house,
            sign,
            degree,
        });
    }
    Ok(PlanetPositions::new(entries))
}
