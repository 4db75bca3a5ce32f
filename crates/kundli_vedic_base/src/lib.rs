//! Vedic chart calculations built on the position engine.
//!
//! This crate provides:
//! - Rashi (zodiac sign) lookup from ecliptic longitude
//! - House (bhava) assignment from right ascension
//! - The position engine: house, sign and degree for all nine bodies
//! - The ascendant (lagna) progression in fixed 2-hour steps
//! - Static interpretation tables: yogas, dasha sequence, gemstones

pub mod bhava;
pub mod dasha;
pub mod error;
pub mod gemstone;
pub mod lagna;
pub mod positions;
pub mod rashi;
pub mod yoga;

pub use bhava::{HOUSE_COUNT, house_from_right_ascension, house_ordinal, normalize_house};
pub use dasha::{DASHA_SEQUENCE, DashaPeriod, DashaSequence, dasha_sequence};
pub use error::VedicError;
pub use gemstone::{GEMSTONES, Gemstone};
pub use lagna::{ASCENDANT_STEP_HOURS, AscendantMap, ascendant_map};
pub use positions::{PlanetPosition, PlanetPositions, compute_positions, round_degree};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use yoga::{NO_YOGA_MESSAGE, YOGA_RULES, YogaResult, YogaRule, evaluate_yogas};
