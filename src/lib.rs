//! # sunpos
//!
//! Low-precision apparent position of the Sun (azimuth, altitude) for an observer on
//! the Earth, accurate to a fraction of a degree. Meant for lighting, shading and
//! calendar work rather than ephemeris-grade astrometry: no refraction, no parallax,
//! no nutation or aberration.
//!
//! See [`sun_position::SunPosition`] for the entry point.
mod anomaly;
pub mod constants;
mod horizontal;
mod ref_system;
pub mod sun_position;
pub mod sunpos_errors;
pub mod time;
