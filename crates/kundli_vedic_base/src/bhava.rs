//! House (bhava) assignment.
//!
//! The full circle of right ascension is cut into 12 equal sectors; sector 0
//! is house 1. Houses are always reported in [1, 12].

use std::f64::consts::TAU;

use kundli_core::Body;

use crate::error::VedicError;

pub const HOUSE_COUNT: u8 = 12;

/// Fold a raw `floor + 1` house value back into [1, 12].
///
/// Only 13 can occur from a right ascension of exactly 2π; it becomes 1.
pub const fn normalize_house(raw: u32) -> u8 {
    if raw > HOUSE_COUNT as u32 {
        (raw - HOUSE_COUNT as u32) as u8
    } else {
        raw as u8
    }
}

/// House for a right ascension in radians.
///
/// Accepts [0, 2π]; anything else is a computation error.
pub fn house_from_right_ascension(body: Body, ra_rad: f64) -> Result<u8, VedicError> {
    if !ra_rad.is_finite() || !(0.0..=TAU).contains(&ra_rad) {
        return Err(VedicError::InvalidAngle {
            body,
            radians: ra_rad,
        });
    }
    let raw = ((ra_rad / TAU) * HOUSE_COUNT as f64).floor() as u32 + 1;
    Ok(normalize_house(raw))
}

/// English ordinal for a house number ("1st", "2nd", ... "12th").
pub fn house_ordinal(house: u8) -> String {
    let suffix = match (house % 10, house % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{house}{suffix}")
}
