//! End-to-end pipeline scenarios with stub location and position sources.

use std::cell::Cell;

use kundli_core::{ApparentPosition, EngineError};
use kundli_geo::GeoError;
use kundli_rs::*;
use kundli_vedic_base::NO_YOGA_MESSAGE;

const RAJA: &str = "Raja Yoga: Jupiter in the 9th house indicates good fortune and success.";
const DHANA: &str = "Dhana Yoga: Venus in the 7th house signifies wealth and good relationships.";

/// Counts calls, delegating to the mean-element engine.
#[derive(Default)]
struct CountingEphemeris {
    calls: Cell<usize>,
}

impl Ephemeris for CountingEphemeris {
    fn apparent_position(
        &self,
        body: Body,
        ctx: &ObservationContext,
    ) -> Result<ApparentPosition, EngineError> {
        self.calls.set(self.calls.get() + 1);
        MeanElementEngine.apparent_position(body, ctx)
    }
}

/// Every body at a fixed right ascension, in degrees.
struct FixedEphemeris {
    ra_deg: fn(Body) -> f64,
}

impl Ephemeris for FixedEphemeris {
    fn apparent_position(
        &self,
        body: Body,
        _ctx: &ObservationContext,
    ) -> Result<ApparentPosition, EngineError> {
        let ra = (self.ra_deg)(body);
        Ok(ApparentPosition {
            right_ascension_rad: ra.to_radians(),
            declination_rad: 0.0,
            ecliptic_longitude_deg: ra,
            ecliptic_latitude_deg: 0.0,
        })
    }
}

struct CountingGeocoder {
    inner: StaticGeocoder,
    calls: Cell<usize>,
}

impl Geocoder for CountingGeocoder {
    fn lookup(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeoError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.lookup(query)
    }
}

struct DownGeocoder;

impl Geocoder for DownGeocoder {
    fn lookup(&self, _query: &LocationQuery) -> Result<Option<Coordinates>, GeoError> {
        Err(GeoError::Transport("connection refused".into()))
    }
}

fn places() -> StaticGeocoder {
    StaticGeocoder::new()
        .with_place(&LocationQuery::new("Pune", "Maharashtra"), 18.5204, 73.8567)
        .with_place(&LocationQuery::new("Greenwich", "London"), 51.4769, 0.0)
}

fn j2000() -> UtcTime {
    UtcTime::from_calendar(2000, 1, 1, 12, 0, 0).unwrap()
}

#[test]
fn unknown_place_never_reaches_engine() {
    let g = KundliGenerator::new(places(), CountingEphemeris::default());
    let details = BirthDetails::new("Nowhereville", "Atlantis", "2000-01-01", "12:00");
    match g.generate(&details) {
        Err(KundliError::LocationNotFound { query }) => {
            assert_eq!(query, "Nowhereville, Atlantis");
        }
        other => panic!("expected LocationNotFound, got {other:?}"),
    }
    assert_eq!(g.ephemeris().calls.get(), 0);
}

#[test]
fn invalid_datetime_rejected_before_lookup() {
    let geo = CountingGeocoder {
        inner: places(),
        calls: Cell::new(0),
    };
    let g = KundliGenerator::new(&geo, CountingEphemeris::default());
    let details = BirthDetails::new("Pune", "Maharashtra", "2001-02-29", "10:00");
    assert!(matches!(
        g.generate(&details),
        Err(KundliError::InvalidDateTime(_))
    ));
    assert_eq!(geo.calls.get(), 0);
    assert_eq!(g.ephemeris().calls.get(), 0);
}

#[test]
fn lookup_failure_is_geocoding_error() {
    let g = KundliGenerator::new(DownGeocoder, CountingEphemeris::default());
    let details = BirthDetails::new("Pune", "Maharashtra", "2000-01-01", "12:00");
    assert!(matches!(g.generate(&details), Err(KundliError::Geocoding(_))));
    assert_eq!(g.ephemeris().calls.get(), 0);
}

#[test]
fn full_pipeline_for_known_place() {
    let g = KundliGenerator::new(places(), CountingEphemeris::default());
    let details = BirthDetails::new("pune", "MAHARASHTRA", "2000-01-01", "12:00");
    let k = g.generate(&details).unwrap();

    assert_eq!(k.place.as_deref(), Some("Pune, Maharashtra"));
    assert_eq!(k.context.location.latitude_deg, 18.5204);
    assert_eq!(k.positions.len(), 9);
    assert_eq!(k.ascendants.len(), 12);
    // Nine positions plus one Sun query per ascendant step.
    assert_eq!(g.ephemeris().calls.get(), 9 + 12);

    // Sun in Capricorn at J2000; house 1 of the ascendant map is the Sun's sign.
    assert_eq!(k.positions.get(Body::Sun).unwrap().sign, Rashi::Makara);
    assert_eq!(k.ascendants.get(1), Some(Rashi::Makara));
    assert_eq!(k.gemstones().len(), 9);
    assert_eq!(k.dasha.current.lord, Body::Jupiter);
}

#[test]
fn pipeline_is_idempotent() {
    let g = KundliGenerator::new(places(), MeanElementEngine::new());
    let details = BirthDetails::new("Greenwich", "London", "1987-06-14", "21:45");
    let a = g.generate(&details).unwrap();
    let b = g.generate(&details).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.render_svg(&RenderOptions::default()).unwrap(),
        b.render_svg(&RenderOptions::default()).unwrap()
    );
}

#[test]
fn jupiter_in_ninth_triggers_raja_yoga() {
    let eph = FixedEphemeris {
        ra_deg: |body| match body {
            Body::Jupiter => 250.0,
            _ => 10.0,
        },
    };
    let g = KundliGenerator::new(StaticGeocoder::new(), eph);
    let k = g.generate_at(j2000(), 0.0, 0.0).unwrap();
    assert_eq!(k.positions.house_of(Body::Jupiter), Some(9));
    assert_eq!(k.yoga_messages(), vec![RAJA]);
}

#[test]
fn yogas_keep_table_order() {
    let eph = FixedEphemeris {
        ra_deg: |body| match body {
            Body::Venus => 195.0,
            Body::Jupiter => 255.0,
            _ => 10.0,
        },
    };
    let k = Kundli::compute(&eph, ObservationContext::from_coordinates(j2000(), 0.0, 0.0).unwrap())
        .unwrap();
    assert_eq!(k.yoga_messages(), vec![RAJA, DHANA]);
}

#[test]
fn no_yoga_gives_single_fallback() {
    let eph = FixedEphemeris { ra_deg: |_| 10.0 };
    let g = KundliGenerator::new(StaticGeocoder::new(), eph);
    let k = g.generate_at(j2000(), 0.0, 0.0).unwrap();
    assert_eq!(k.yoga_messages(), vec![NO_YOGA_MESSAGE]);
}

#[test]
fn engine_failure_is_computation_error() {
    struct Broken;
    impl Ephemeris for Broken {
        fn apparent_position(
            &self,
            body: Body,
            _ctx: &ObservationContext,
        ) -> Result<ApparentPosition, EngineError> {
            Err(EngineError::NonFinite { body })
        }
    }
    let g = KundliGenerator::new(StaticGeocoder::new(), Broken);
    assert!(matches!(
        g.generate_at(j2000(), 0.0, 0.0),
        Err(KundliError::Computation(_))
    ));
}

#[test]
fn chart_file_written() {
    let g = KundliGenerator::new(places(), MeanElementEngine::new());
    let k = g.generate_at(j2000(), 18.5204, 73.8567).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    k.write_svg(&path, &RenderOptions::default()).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Vedic Kundli Chart with Ascendants"));
    assert!(svg.contains("Capricorn"));
}
