//! # Apparent position of the Sun
//!
//! [`SunPosition`] is the entry point of the crate: it runs the whole pipeline eagerly
//! for one `(instant, latitude, longitude)` triple and keeps only the result.
//!
//! ```text
//! instant ──> Julian day ──> mean anomaly ──> ecliptic longitude
//!                  │                                  │
//!                  v                                  v
//!          local sidereal time ─────> hour angle <── (α, δ)
//!                                         │
//!                                         v
//!                               azimuth, altitude
//! ```
//!
//! ## Conventions
//!
//! - Latitude and longitude are **degrees**, north and east positive. They are not
//!   range-checked: out-of-range values are computed like any other.
//! - Azimuth is measured **from the south, westward positive**, in radians.
//! - Altitude is measured above the horizon, in radians, without refraction.
//!
//! ## Quick start
//!
//! ```rust
//! use hifitime::Epoch;
//! use sunpos::sun_position::SunPosition;
//!
//! let noon = Epoch::from_gregorian_utc_hms(2020, 6, 21, 12, 0, 0);
//! let london = SunPosition::new(&noon, 51.5074, -0.1278);
//!
//! assert!(london.altitude_deg() > 60.0);
//! ```
use std::str::FromStr;

use hifitime::Epoch;
use log::{debug, trace};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::anomaly::mean_anomaly;
use crate::constants::{Degree, Radian, RADEG};
use crate::horizontal::{altitude, azimuth};
use crate::ref_system::equatorial_coordinates;
use crate::sunpos_errors::SunPosError;
use crate::time::{hour_angle, JulianDay};

/// Geographic location of an observer, in degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: Degree,
    pub longitude: Degree,
}

impl GeoCoordinate {
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }
}

/// Horizontal coordinates of the Sun for one observer and one instant.
///
/// # Fields
///
/// * `azimuth` - radians, from the south and increasing westward, in `(-π, π]`
/// * `altitude` - radians above the horizon, in `[-π/2, π/2]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPosition {
    pub azimuth: Radian,
    pub altitude: Radian,
}

impl SunPosition {
    /// Compute the position of the Sun seen from `(latitude, longitude)` at `instant`.
    ///
    /// Arguments
    /// ---------
    /// * `instant`: any absolute instant ([`hifitime::Epoch`], [`std::time::SystemTime`])
    /// * `latitude`: observer latitude in degrees, north positive
    /// * `longitude`: observer longitude in degrees, east positive
    ///
    /// Return
    /// ------
    /// * the [`SunPosition`]. Non-finite inputs give NaN fields.
    pub fn new<T: JulianDay + ?Sized>(instant: &T, latitude: Degree, longitude: Degree) -> Self {
        let lw = RADEG * -longitude;
        let phi = RADEG * latitude;
        let jd = instant.julian_day();

        let coordinates = equatorial_coordinates(mean_anomaly(jd));
        let h = hour_angle(jd, lw, coordinates.right_ascension);

        let position = SunPosition {
            azimuth: azimuth(h, phi, coordinates.declination),
            altitude: altitude(h, phi, coordinates.declination),
        };

        trace!(
            "sun position at jd={jd} lat={latitude} lon={longitude}: az={} alt={}",
            position.azimuth,
            position.altitude
        );

        position
    }

    /// Same as [`SunPosition::new`] for an observer held as a [`GeoCoordinate`].
    pub fn at<T: JulianDay + ?Sized>(instant: &T, location: &GeoCoordinate) -> Self {
        SunPosition::new(instant, location.latitude, location.longitude)
    }

    /// Parse `date` with [`hifitime::Epoch::from_str`] (e.g. `"2020-06-21T12:00:00 UTC"`)
    /// and compute the position of the Sun at that instant.
    ///
    /// Return
    /// ------
    /// * `Err(SunPosError::InvalidDate)` if the string is not a valid date
    pub fn from_date_str(
        date: &str,
        latitude: Degree,
        longitude: Degree,
    ) -> Result<Self, SunPosError> {
        let epoch = Epoch::from_str(date).map_err(|err| {
            debug!("unable to parse date {date:?}: {err}");
            SunPosError::from(err)
        })?;

        Ok(SunPosition::new(&epoch, latitude, longitude))
    }

    /// Azimuth in degrees (south-based, westward positive).
    pub fn azimuth_deg(&self) -> Degree {
        self.azimuth / RADEG
    }

    /// Altitude in degrees.
    pub fn altitude_deg(&self) -> Degree {
        self.altitude / RADEG
    }

    /// Unit vector pointing to the Sun in the local East-North-Up frame.
    pub fn direction(&self) -> Vector3<f64> {
        let (sin_alt, cos_alt) = self.altitude.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();

        Vector3::new(-cos_alt * sin_az, -cos_alt * cos_az, sin_alt)
    }
}
