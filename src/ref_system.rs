//! # Ecliptic → equatorial conversion
//!
//! Rotation of a direction given in **ecliptic coordinates** (longitude `l`, latitude `b`)
//! about the equinox axis by the obliquity of the ecliptic [`OBLIQUITY`], giving
//! **equatorial coordinates** (right ascension, declination).
//!
//! ```text
//! α = atan2(sin l · cos ε − tan b · sin ε, cos l)
//! δ = asin(sin b · cos ε + cos b · sin ε · sin l)
//! ```
//!
//! The Sun's ecliptic latitude is taken as zero, but both formulas keep the general `b`
//! argument so they can be checked term by term against the usual references.
use crate::anomaly::ecliptic_longitude;
use crate::constants::{Radian, OBLIQUITY};

/// Equatorial position of the Sun, both angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EquatorialCoordinates {
    pub(crate) right_ascension: Radian,
    pub(crate) declination: Radian,
}

/// Right ascension of the ecliptic direction `(l, b)`, in `(-π, π]`.
pub(crate) fn right_ascension(l: Radian, b: Radian) -> Radian {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

/// Declination of the ecliptic direction `(l, b)`, in `[-π/2, π/2]`.
pub(crate) fn declination(l: Radian, b: Radian) -> Radian {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Equatorial coordinates of the Sun for a given mean anomaly
///
/// Arguments
/// ---------
/// * `mean_anomaly`: Sun's mean anomaly in radians
///
/// Return
/// ------
/// * [`EquatorialCoordinates`] computed from the ecliptic longitude, with ecliptic
///   latitude fixed to 0
pub(crate) fn equatorial_coordinates(mean_anomaly: Radian) -> EquatorialCoordinates {
    let l = ecliptic_longitude(mean_anomaly);

    EquatorialCoordinates {
        right_ascension: right_ascension(l, 0.0),
        declination: declination(l, 0.0),
    }
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::anomaly::mean_anomaly;
    use crate::constants::{DPI, J2000};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_equinoxes_and_solstices() {
        // vernal equinox
        assert_eq!(right_ascension(0.0, 0.0), 0.0);
        assert_eq!(declination(0.0, 0.0), 0.0);

        // summer solstice: δ = ε
        assert_relative_eq!(right_ascension(FRAC_PI_2, 0.0), FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!(declination(FRAC_PI_2, 0.0), OBLIQUITY, epsilon = 1e-15);

        // autumnal equinox
        assert_relative_eq!(right_ascension(PI, 0.0), PI, epsilon = 1e-15);
        assert_relative_eq!(declination(PI, 0.0), 0.0, epsilon = 1e-15);

        // winter solstice: δ = -ε
        assert_relative_eq!(declination(-FRAC_PI_2, 0.0), -OBLIQUITY, epsilon = 1e-15);
    }

    #[test]
    fn test_nonzero_ecliptic_latitude() {
        assert_relative_eq!(right_ascension(1.0, 0.1), 0.9350219737126316, epsilon = 1e-12);
        assert_relative_eq!(declination(1.0, 0.1), 0.4385711842278938, epsilon = 1e-12);

        // a pole of the ecliptic sits at δ = 90° - ε
        assert_relative_eq!(declination(-FRAC_PI_2, FRAC_PI_2), FRAC_PI_2 - OBLIQUITY, epsilon = 1e-12);
    }

    #[test]
    fn test_equatorial_coordinates_j2000() {
        let coords = equatorial_coordinates(mean_anomaly(J2000));
        assert_relative_eq!(coords.right_ascension, -1.3737009872343342, epsilon = 1e-12);
        assert_relative_eq!(coords.declination, -0.40201257585997147, epsilon = 1e-12);
    }

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for i in 0..3600 {
            let m = DPI * i as f64 / 3600.0;
            let coords = equatorial_coordinates(m);
            assert!(coords.declination.abs() <= OBLIQUITY + 1e-12);
            assert!(coords.right_ascension > -PI && coords.right_ascension <= PI);
        }
    }
}
