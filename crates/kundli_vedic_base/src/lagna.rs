//! Ascendant (lagna) progression.
//!
//! Rising signs turn through the whole zodiac in roughly a day, so each of
//! the 12 houses is given the sign found 2 hours after the previous one.
//! The Sun's sign at each step stands in for the true rising sign; this is
//! a known approximation and not an ascendant calculation.

use kundli_core::{Body, Ephemeris, ObservationContext};
use log::debug;

use crate::bhava::HOUSE_COUNT;
use crate::error::VedicError;
use crate::rashi::{Rashi, rashi_from_longitude};

/// Clock advance between consecutive houses.
pub const ASCENDANT_STEP_HOURS: i64 = 2;

/// Sign for each house 1..=12, in house order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AscendantMap {
    signs: [Rashi; HOUSE_COUNT as usize],
}

impl AscendantMap {
    pub fn new(signs: [Rashi; HOUSE_COUNT as usize]) -> Self {
        Self { signs }
    }

    /// Sign of `house` (1-based). `None` outside [1, 12].
    pub fn get(&self, house: u8) -> Option<Rashi> {
        if (1..=HOUSE_COUNT).contains(&house) {
            Some(self.signs[(house - 1) as usize])
        } else {
            None
        }
    }

    /// `(house, sign)` pairs in house order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Rashi)> + '_ {
        self.signs
            .iter()
            .enumerate()
            .map(|(i, r)| (i as u8 + 1, *r))
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Compute the ascendant map starting at `ctx`.
///
/// `ctx` is not modified; stepping happens on private copies.
pub fn ascendant_map<E: Ephemeris + ?Sized>(
    eph: &E,
    ctx: &ObservationContext,
) -> Result<AscendantMap, VedicError> {
    let mut signs = [Rashi::Mesha; HOUSE_COUNT as usize];
    let mut step = *ctx;
    for (i, slot) in signs.iter_mut().enumerate() {
        let sun = eph.apparent_position(Body::Sun, &step)?;
        *slot = rashi_from_longitude(sun.ecliptic_longitude_deg);
        debug!("ascendant house {} at {}: {}", i + 1, step.time, slot);
        if i + 1 < HOUSE_COUNT as usize {
            step = step.advanced_by_hours(ASCENDANT_STEP_HOURS)?;
        }
    }
    Ok(AscendantMap::new(signs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_one_based() {
        let mut signs = [Rashi::Mesha; 12];
        signs[0] = Rashi::Makara;
        signs[11] = Rashi::Kumbha;
        let map = AscendantMap::new(signs);
        assert_eq!(map.get(1), Some(Rashi::Makara));
        assert_eq!(map.get(12), Some(Rashi::Kumbha));
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(13), None);
    }

    #[test]
    fn iter_yields_houses_in_order() {
        let map = AscendantMap::new(crate::rashi::ALL_RASHIS);
        let houses: Vec<u8> = map.iter().map(|(h, _)| h).collect();
        assert_eq!(houses, (1..=12).collect::<Vec<u8>>());
        assert_eq!(map.len(), 12);
    }
}
