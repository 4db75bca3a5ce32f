//! Rotation between ecliptic and equatorial frames about the x-axis.

/// Rotate an ecliptic vector into the equatorial frame.
///
/// `obliquity_deg` is the angle between the two planes.
pub fn ecliptic_to_equatorial(v: &[f64; 3], obliquity_deg: f64) -> [f64; 3] {
    let (s, c) = obliquity_deg.to_radians().sin_cos();
    [v[0], v[1] * c - v[2] * s, v[1] * s + v[2] * c]
}
