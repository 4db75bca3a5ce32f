//! Default position engine built on mean orbital elements.

use kundli_frames::{
    cartesian_to_spherical, ecliptic_to_equatorial, mean_obliquity_deg, normalize_rad,
};
use log::trace;

use crate::elements::{ElementModel, day_number, element_model, orbit_position, sun_elements};
use crate::{ApparentPosition, Body, Ephemeris, EngineError, ObservationContext};

/// Simplified geocentric position model.
///
/// Positions are geocentric and referred to the mean equinox of date.
/// The observer's location is validated upstream but does not shift the
/// result; parallax and light time are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanElementEngine;

impl MeanElementEngine {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric ecliptic rectangular vector of `body` at day number `d`.
    pub fn ecliptic_vector(&self, body: Body, d: f64) -> [f64; 3] {
        match element_model(body, d) {
            ElementModel::Geocentric(el) => orbit_position(&el),
            ElementModel::Heliocentric(el) => {
                let helio = orbit_position(&el);
                let sun = orbit_position(&sun_elements(d));
                [helio[0] + sun[0], helio[1] + sun[1], helio[2] + sun[2]]
            }
            ElementModel::EclipticPoint { longitude_deg } => {
                let (s, c) = longitude_deg.to_radians().sin_cos();
                [c, s, 0.0]
            }
        }
    }
}

impl Ephemeris for MeanElementEngine {
    fn apparent_position(
        &self,
        body: Body,
        ctx: &ObservationContext,
    ) -> Result<ApparentPosition, EngineError> {
        let d = day_number(ctx.jd());
        let ecl = self.ecliptic_vector(body, d);
        if ecl.iter().any(|c| !c.is_finite()) {
            return Err(EngineError::NonFinite { body });
        }

        let ecl_sph = cartesian_to_spherical(&ecl);
        let eq = ecliptic_to_equatorial(&ecl, mean_obliquity_deg(d));
        let ra = normalize_rad(eq[1].atan2(eq[0]));
        let dec = (eq[2] / ecl_sph.distance).asin();

        let pos = ApparentPosition {
            right_ascension_rad: ra,
            declination_rad: dec,
            ecliptic_longitude_deg: ecl_sph.lon_deg,
            ecliptic_latitude_deg: ecl_sph.lat_deg,
        };
        if !pos.right_ascension_rad.is_finite() || !pos.declination_rad.is_finite() {
            return Err(EngineError::NonFinite { body });
        }
        trace!(
            "{body} at d={d:.5}: ra={:.6} rad, lon={:.4} deg",
            pos.right_ascension_rad, pos.ecliptic_longitude_deg
        );
        Ok(pos)
    }
}
