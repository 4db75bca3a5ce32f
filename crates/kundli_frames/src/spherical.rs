//! Cartesian → spherical coordinate conversion.

use std::f64::consts::TAU;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, in the input's units.
    pub distance: f64,
}

/// Normalize an angle to [0, 2π) radians.
pub fn normalize_rad(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    SphericalCoords {
        lon_deg: normalize_rad(y.atan2(x)).to_degrees(),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_y_wraps_longitude() {
        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn origin_is_degenerate_zero() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
        assert_eq!(s.lon_deg, 0.0);
    }

    #[test]
    fn pole() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 2.0]);
        assert!((s.lat_deg - 90.0).abs() < 1e-12);
        assert!((s.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn diagonal_vector_sits_at_45_degrees() {
        let s = cartesian_to_spherical(&[1.0, 1.0, 0.0]);
        assert!((s.lon_deg - 45.0).abs() < 1e-12);
        assert!(s.lat_deg.abs() < 1e-12);
        assert!((s.distance - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn normalize_handles_negative_and_large() {
        assert!((normalize_rad(-0.5 * TAU) - 0.5 * TAU).abs() < 1e-12);
        assert!((normalize_rad(2.5 * TAU) - 0.5 * TAU).abs() < 1e-9);
        assert!(normalize_rad(-1e-20) < TAU);
    }
}
