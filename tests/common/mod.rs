use approx::assert_relative_eq;
use sunpos::sun_position::SunPosition;

/// Tolerance of the reference scenarios, ~0.03°
pub const REFERENCE_TOL: f64 = 5e-4;

pub fn assert_position_close(actual: &SunPosition, expected: &SunPosition, epsilon: f64) {
    assert_relative_eq!(actual.azimuth, expected.azimuth, epsilon = epsilon);
    assert_relative_eq!(actual.altitude, expected.altitude, epsilon = epsilon);
}
