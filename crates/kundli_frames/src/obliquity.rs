//! Mean obliquity of the ecliptic.

/// Mean obliquity at 1999-12-31 0h in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.4393;

/// Linear drift of the obliquity in degrees per day.
const OBLIQUITY_RATE_DEG_PER_DAY: f64 = -3.563e-7;

/// Mean obliquity of the ecliptic in degrees.
///
/// `d` is the day number counted from 1999-12-31 0h UT (JD 2451543.5).
/// Linear low-precision model, adequate to a few arcseconds over centuries.
pub fn mean_obliquity_deg(d: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG_PER_DAY * d
}
