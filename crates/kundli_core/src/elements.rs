//! Mean orbital elements for the simplified position model.
//!
//! Low-precision elements referred to the mean ecliptic and equinox of date,
//! counted from day 0 = 1999-12-31 0h UT (JD 2451543.5). No perturbation
//! terms are applied, so Moon errors reach a few degrees and outer-planet
//! errors a fraction of a degree.

use crate::Body;

/// Julian Date of day number 0.
pub const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;

/// Keplerian elements at one instant. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Longitude of the ascending node.
    pub node_deg: f64,
    /// Inclination to the ecliptic.
    pub inclination_deg: f64,
    /// Argument of perihelion (perigee for the Sun and Moon).
    pub perihelion_deg: f64,
    /// Semi-major axis (AU for planets, Earth radii for the Moon).
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly_deg: f64,
}

/// How a body's geocentric direction is obtained from its elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementModel {
    /// Orbit already referred to the Earth (Sun, Moon).
    Geocentric(OrbitalElements),
    /// Heliocentric orbit; the Sun's geocentric vector must be added.
    Heliocentric(OrbitalElements),
    /// Ecliptic point at the given longitude (lunar nodes).
    EclipticPoint { longitude_deg: f64 },
}

/// Day number since the element epoch.
pub fn day_number(jd: f64) -> f64 {
    jd - ELEMENT_EPOCH_JD
}

pub fn sun_elements(d: f64) -> OrbitalElements {
    OrbitalElements {
        node_deg: 0.0,
        inclination_deg: 0.0,
        perihelion_deg: 282.9404 + 4.70935e-5 * d,
        semi_major_axis: 1.0,
        eccentricity: 0.016709 - 1.151e-9 * d,
        mean_anomaly_deg: 356.0470 + 0.985_600_258_5 * d,
    }
}

pub fn moon_elements(d: f64) -> OrbitalElements {
    OrbitalElements {
        node_deg: 125.1228 - 0.052_953_808_3 * d,
        inclination_deg: 5.1454,
        perihelion_deg: 318.0634 + 0.164_357_322_3 * d,
        semi_major_axis: 60.2666,
        eccentricity: 0.054900,
        mean_anomaly_deg: 115.3654 + 13.064_992_950_9 * d,
    }
}

fn mercury_elements(d: f64) -> OrbitalElements {
    OrbitalElements {
        node_deg: 48.3313 + 3.24587e-5 * d,
        inclination_deg: 7.0047 + 5.00e-8 * d,
        perihelion_deg: 29.1241 + 1.01444e-5 * d,
        semi_major_axis: 0.387098,
        eccentricity: 0.205635 + 5.59e-10 * d,
        mean_anomaly_deg: 168.6562 + 4.092_334_436_8 * d,
    }
}

fn venus_elements(d: f64) -> OrbitalElements {
    OrbitalElements {
        node_deg: 76.6799 + 2.46590e-5 * d,
        inclination_deg: 3.3946 + 2.75e-8 * d,
        perihelion_deg: 54.8910 + 1.38374e-5 * d,
        semi_major_axis: 0.723330,
        eccentricity: 0.006773 - 1.302e-9 * d,
        mean_anomaly_deg: 48.0052 + 1.602_130_224_4 * d,
    }
}

fn mars_elements(d: f64) -> OrbitalElements {
    OrbitalElements {
        node_deg: 49.5574 + 2.11081e-5 * d,
        inclination_deg: 1.8497 - 1.78e-8 * d,
        perihelion_deg: 286.5016 + 2.92961e-5 * d,
        semi_major_axis: 1.523688,
        eccentricity: 0.093405 + 2.516e-9 * d,
        mean_anomaly_deg: 18.6021 + 0.524_020_776_6 * d,
    }
}

fn jupiter_elements(d: f64) -> OrbitalElements {
    OrbitalElements {
        node_deg: 100.4542 + 2.76854e-5 * d,
        inclination_deg: 1.3030 - 1.557e-7 * d,
        perihelion_deg: 273.8777 + 1.64505e-5 * d,
        semi_major_axis: 5.20256,
        eccentricity: 0.048498 + 4.469e-9 * d,
        mean_anomaly_deg: 19.8950 + 0.083_085_300_1 * d,
    }
}

fn saturn_elements(d: f64) -> OrbitalElements {
    OrbitalElements {
        node_deg: 113.6634 + 2.38980e-5 * d,
        inclination_deg: 2.4886 - 1.081e-7 * d,
        perihelion_deg: 339.3939 + 2.97661e-5 * d,
        semi_major_axis: 9.55475,
        eccentricity: 0.055546 - 9.499e-9 * d,
        mean_anomaly_deg: 316.9670 + 0.033_444_228_2 * d,
    }
}

/// Element model for `body` at day number `d`.
///
/// Rahu is placed at the Moon's mean ascending node and Ketu opposite it.
pub fn element_model(body: Body, d: f64) -> ElementModel {
    match body {
        Body::Sun => ElementModel::Geocentric(sun_elements(d)),
        Body::Moon => ElementModel::Geocentric(moon_elements(d)),
        Body::Mercury => ElementModel::Heliocentric(mercury_elements(d)),
        Body::Venus => ElementModel::Heliocentric(venus_elements(d)),
        Body::Mars => ElementModel::Heliocentric(mars_elements(d)),
        Body::Jupiter => ElementModel::Heliocentric(jupiter_elements(d)),
        Body::Saturn => ElementModel::Heliocentric(saturn_elements(d)),
        Body::Rahu => ElementModel::EclipticPoint {
            longitude_deg: moon_elements(d).node_deg,
        },
        Body::Ketu => ElementModel::EclipticPoint {
            longitude_deg: moon_elements(d).node_deg + 180.0,
        },
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
pub fn eccentric_anomaly_rad(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    const MAX_ITER: usize = 30;
    const TOL: f64 = 1e-12;

    let m = mean_anomaly_rad;
    let e = eccentricity;
    let mut ea = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..MAX_ITER {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < TOL {
            break;
        }
    }
    ea
}

/// Ecliptic rectangular position of the orbiting body, relative to the
/// orbit's focus, in the units of `semi_major_axis`.
pub fn orbit_position(el: &OrbitalElements) -> [f64; 3] {
    let m = el.mean_anomaly_deg.to_radians().rem_euclid(std::f64::consts::TAU);
    let e = el.eccentricity;
    let ea = eccentric_anomaly_rad(m, e);

    let xv = el.semi_major_axis * (ea.cos() - e);
    let yv = el.semi_major_axis * (1.0 - e * e).sqrt() * ea.sin();
    let v = yv.atan2(xv);
    let r = (xv * xv + yv * yv).sqrt();

    let n = el.node_deg.to_radians();
    let i = el.inclination_deg.to_radians();
    let u = v + el.perihelion_deg.to_radians();

    let (sin_n, cos_n) = n.sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    [
        r * (cos_n * cos_u - sin_n * sin_u * cos_i),
        r * (sin_n * cos_u + cos_n * sin_u * cos_i),
        r * sin_u * sin_i,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit_is_identity() {
        for m in [0.0, 0.5, 2.0, 5.9] {
            assert!((eccentric_anomaly_rad(m, 0.0) - m).abs() < 1e-12);
        }
    }

    #[test]
    fn kepler_residual_small_for_mercury_eccentricity() {
        let m = 1.234;
        let e = 0.2056;
        let ea = eccentric_anomaly_rad(m, e);
        assert!((ea - e * ea.sin() - m).abs() < 1e-10);
    }

    #[test]
    fn ketu_opposite_rahu() {
        let d = 9_000.0;
        let ElementModel::EclipticPoint { longitude_deg: r } = element_model(Body::Rahu, d) else {
            panic!("Rahu must be an ecliptic point");
        };
        let ElementModel::EclipticPoint { longitude_deg: k } = element_model(Body::Ketu, d) else {
            panic!("Ketu must be an ecliptic point");
        };
        assert!((k - r - 180.0).abs() < 1e-9);
    }

    #[test]
    fn planets_are_heliocentric() {
        for body in [Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter, Body::Saturn] {
            assert!(matches!(element_model(body, 0.0), ElementModel::Heliocentric(_)));
        }
        assert!(matches!(element_model(Body::Sun, 0.0), ElementModel::Geocentric(_)));
        assert!(matches!(element_model(Body::Moon, 0.0), ElementModel::Geocentric(_)));
    }

    #[test]
    fn orbit_radius_within_apsides() {
        let el = mars_elements(1234.0);
        let p = orbit_position(&el);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        let q = el.semi_major_axis * (1.0 - el.eccentricity);
        let big_q = el.semi_major_axis * (1.0 + el.eccentricity);
        assert!(r >= q - 1e-9 && r <= big_q + 1e-9, "r = {r}");
    }
}
