//! Frame conversion helpers for the simplified position model.
//!
//! Provides the mean obliquity of the ecliptic, the ecliptic → equatorial
//! rotation, and Cartesian → spherical conversion.

pub mod obliquity;
pub mod rotation;
pub mod spherical;

pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use rotation::ecliptic_to_equatorial;
pub use spherical::{SphericalCoords, cartesian_to_spherical, normalize_rad};
