//! Calendar and time handling for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - A validated UTC timestamp ([`UtcTime`]) built from a birth date and time
//! - Fixed-step clock advance used by the ascendant progression

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd};
pub use utc_time::{UtcTime, is_valid_datetime};
