//! # Constants and type definitions for sunpos
//!
//! This module centralizes the **angular constants**, **epoch references** and **unit
//! aliases** used by the solar-position pipeline.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, days ↔ seconds)
//! - Julian-day epochs (Unix epoch, J2000.0)
//! - Fixed orbital parameters of the low-precision solar model
//!   (obliquity of the ecliptic, longitude of perihelion)
//!
//! All values are plain `const` items: they are read-only for the whole process.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// -------------------------------------------------------------------------------------------------
// Epochs
// -------------------------------------------------------------------------------------------------

/// Julian day at 1970-01-01 12:00:00 UTC (the Unix epoch sits half a day earlier)
pub const J1970: f64 = 2_440_588.0;

/// Julian day of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000: f64 = 2_451_545.0;

// -------------------------------------------------------------------------------------------------
// Solar model parameters
// -------------------------------------------------------------------------------------------------

/// Obliquity of the ecliptic, fixed at its J2000 value
pub const OBLIQUITY: Radian = RADEG * 23.4397;

/// Ecliptic longitude of the Earth's perihelion
pub const PERIHELION: Radian = RADEG * 102.9372;

/// Mean anomaly of the Sun at J2000 (degrees)
pub(crate) const MEAN_ANOMALY_J2000: Degree = 357.5291;

/// Daily motion of the Sun's mean anomaly (degrees/day)
pub(crate) const MEAN_ANOMALY_RATE: Degree = 0.98560028;

/// Sidereal angle at J2000 (degrees)
pub(crate) const SIDEREAL_J2000: Degree = 280.16;

/// Daily rotation of the sidereal angle (degrees/day)
pub(crate) const SIDEREAL_RATE: Degree = 360.9856235;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Continuous Julian day number (days)
pub type JulianDate = f64;
