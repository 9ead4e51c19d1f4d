//! Mean anomaly and ecliptic longitude of the Sun.
use std::f64::consts::PI;

use crate::constants::{
    JulianDate, Radian, J2000, MEAN_ANOMALY_J2000, MEAN_ANOMALY_RATE, PERIHELION, RADEG,
};

/// Mean anomaly of the Sun at a given Julian day, in radians (unreduced).
pub(crate) fn mean_anomaly(jd: JulianDate) -> Radian {
    RADEG * (MEAN_ANOMALY_J2000 + MEAN_ANOMALY_RATE * (jd - J2000))
}

/// Equation of center: correction from mean to true anomaly for the Earth's orbital
/// eccentricity.
///
/// Three-term truncation of the Fourier series, good to about 0.01°:
///
/// ```text
/// C = 1.9148·sin(M) + 0.02·sin(2M) + 0.0003·sin(3M)   [degrees]
/// ```
pub(crate) fn equation_of_center(mean_anomaly: Radian) -> Radian {
    let first = 1.9148 * mean_anomaly.sin();
    let second = 0.02 * (2.0 * mean_anomaly).sin();
    let third = 0.0003 * (3.0 * mean_anomaly).sin();

    RADEG * (first + second + third)
}

/// Ecliptic longitude of the Sun from its mean anomaly
///
/// Arguments
/// ---------
/// * `mean_anomaly`: Sun's mean anomaly in radians
///
/// Return
/// ------
/// * the geocentric ecliptic longitude in radians: true anomaly plus the longitude of
///   perihelion, rotated by π to go from heliocentric Earth to geocentric Sun.
pub(crate) fn ecliptic_longitude(mean_anomaly: Radian) -> Radian {
    mean_anomaly + equation_of_center(mean_anomaly) + PERIHELION + PI
}

#[cfg(test)]
mod anomaly_test {
    use super::*;
    use crate::constants::DPI;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_anomaly_at_j2000() {
        let m = mean_anomaly(J2000);
        assert_eq!(m, RADEG * 357.5291);
        assert_relative_eq!(m, 6.240059966692059, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_anomaly_rate() {
        // one anomalistic year later the anomaly has gone once around
        let m0 = mean_anomaly(J2000);
        let m1 = mean_anomaly(J2000 + 360.0 / 0.98560028);
        assert_relative_eq!(m1 - m0, DPI, epsilon = 1e-9);
    }

    #[test]
    fn test_equation_of_center() {
        assert_eq!(equation_of_center(0.0), 0.0);
        assert_relative_eq!(
            equation_of_center(PI / 2.0),
            RADEG * (1.9148 - 0.0003),
            epsilon = 1e-15
        );
        // odd in M
        assert_relative_eq!(
            equation_of_center(-1.0),
            -equation_of_center(1.0),
            epsilon = 1e-15
        );
        // amplitude stays under two degrees
        for i in 0..360 {
            let m = RADEG * i as f64;
            assert!(equation_of_center(m).abs() < RADEG * 1.94);
        }
    }

    #[test]
    fn test_ecliptic_longitude() {
        assert_relative_eq!(ecliptic_longitude(0.0), PERIHELION + PI, epsilon = 1e-15);

        let l = ecliptic_longitude(mean_anomaly(J2000));
        assert_relative_eq!(l, 11.17677415428207, epsilon = 1e-12);
        // early January: the Sun sits near 280° of ecliptic longitude
        assert_relative_eq!(l.rem_euclid(DPI) / RADEG, 280.38, epsilon = 0.01);
    }
}
