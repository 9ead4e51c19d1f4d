//! # Time scales for the solar model
//!
//! Conversion from an absolute instant to a continuous **Julian day**, and the
//! **local sidereal time** / **hour angle** derived from it.
//!
//! Instants are anything implementing [`JulianDay`]: [`hifitime::Epoch`] and
//! [`std::time::SystemTime`] are supported out of the box. Both go through the
//! number of (fractional) seconds elapsed since the Unix epoch, so leap seconds are
//! not counted, matching the POSIX time scale.
use std::time::{SystemTime, UNIX_EPOCH};

use hifitime::Epoch;

use crate::constants::{
    JulianDate, Radian, J1970, J2000, RADEG, SECONDS_PER_DAY, SIDEREAL_J2000, SIDEREAL_RATE,
};

/// An absolute instant convertible to a continuous Julian day number.
pub trait JulianDay {
    /// Seconds elapsed since 1970-01-01T00:00:00 UTC (negative before).
    fn unix_seconds(&self) -> f64;

    /// Continuous Julian day of this instant.
    fn julian_day(&self) -> JulianDate {
        julian_day_from_unix_seconds(self.unix_seconds())
    }
}

impl JulianDay for Epoch {
    fn unix_seconds(&self) -> f64 {
        self.to_unix_seconds()
    }
}

impl JulianDay for SystemTime {
    fn unix_seconds(&self) -> f64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        }
    }
}

/// Convert a count of seconds since the Unix epoch into a Julian day
///
/// Argument
/// --------
/// * `seconds`: seconds elapsed since 1970-01-01T00:00:00 UTC
///
/// Return
/// ------
/// * the continuous Julian day, `seconds / 86400 - 0.5 + J1970`
pub fn julian_day_from_unix_seconds(seconds: f64) -> JulianDate {
    seconds / SECONDS_PER_DAY - 0.5 + J1970
}

/// Julian day of any supported instant.
pub fn julian_day<T: JulianDay + ?Sized>(instant: &T) -> JulianDate {
    instant.julian_day()
}

/// Compute the local sidereal time in radians.
///
/// Arguments
/// ---------
/// * `jd`: Julian day of the instant
/// * `lw`: observer longitude in radians, **west positive** (`RADEG * -longitude`)
///
/// Returns
/// -------
/// * Sidereal angle in radians. The value is not reduced to `[0, 2π)`; it only ever
///   feeds periodic functions.
pub(crate) fn sidereal_time(jd: JulianDate, lw: Radian) -> Radian {
    RADEG * (SIDEREAL_J2000 + SIDEREAL_RATE * (jd - J2000)) - lw
}

/// Hour angle of a body of right ascension `ra`, unnormalised like [`sidereal_time`].
pub(crate) fn hour_angle(jd: JulianDate, lw: Radian, ra: Radian) -> Radian {
    sidereal_time(jd, lw) - ra
}
