//! Projection of an equatorial direction onto the observer's horizon.
//!
//! Azimuth is measured **from the south, increasing westward**, in `(-π, π]`.
//! Altitude is the angle above the horizon, in `[-π/2, π/2]`.
use crate::constants::Radian;

/// Azimuth from hour angle `h`, observer latitude `phi` and declination `dec`.
pub(crate) fn azimuth(h: Radian, phi: Radian, dec: Radian) -> Radian {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Altitude from hour angle `h`, observer latitude `phi` and declination `dec`.
pub(crate) fn altitude(h: Radian, phi: Radian, dec: Radian) -> Radian {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}
