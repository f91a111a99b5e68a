//! Angular speed, acceleration and jerk.
//!
//! Per-minute units divide by a minute at every derivative (`rpm2` is rotations per minute per minute).

use super::angular::{DEGREE, RADIAN, ROTATION};
use super::time::{MINUTE, SECOND};
use rquantity_derive::quantity_type;

quantity_type! {
    /// Angular speed.
    0, 0, -1, 1, QAngularSpeed
}

quantity_type! {
    /// Angular acceleration.
    0, 0, -2, 1, QAngularAcceleration
}

quantity_type! {
    /// Angular jerk.
    0, 0, -3, 1, QAngularJerk
}

/// Radians per second.
pub const RADPS: QAngularSpeed = RADIAN.per(SECOND);
/// Degrees per second.
pub const DEGPS: QAngularSpeed = DEGREE.per(SECOND);
/// Rotations per second.
pub const RPS: QAngularSpeed = ROTATION.per(SECOND);
/// Rotations per minute.
pub const RPM: QAngularSpeed = ROTATION.per(MINUTE);

/// Radians per second squared.
pub const RADPS2: QAngularAcceleration = RADPS.per(SECOND);
/// Degrees per second squared.
pub const DEGPS2: QAngularAcceleration = DEGPS.per(SECOND);
/// Rotations per second squared.
pub const RPS2: QAngularAcceleration = RPS.per(SECOND);
/// Rotations per minute squared.
pub const RPM2: QAngularAcceleration = RPM.per(MINUTE);

/// Radians per second cubed.
pub const RADPS3: QAngularJerk = RADPS2.per(SECOND);
/// Degrees per second cubed.
pub const DEGPS3: QAngularJerk = DEGPS2.per(SECOND);
/// Rotations per second cubed.
pub const RPS3: QAngularJerk = RPS2.per(SECOND);
/// Rotations per minute cubed.
pub const RPM3: QAngularJerk = RPM2.per(MINUTE);

crate::unit_literals!(QAngularSpeed {
    radps => RADPS,
    degps => DEGPS,
    rps => RPS,
    rpm => RPM,
});

crate::unit_literals!(QAngularAcceleration {
    radps2 => RADPS2,
    degps2 => DEGPS2,
    rps2 => RPS2,
    rpm2 => RPM2,
});

crate::unit_literals!(QAngularJerk {
    radps3 => RADPS3,
    degps3 => DEGPS3,
    rps3 => RPS3,
    rpm3 => RPM3,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angular::{deg, QAngle};
    use crate::time::sec;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f64::consts::TAU;

    #[test]
    fn speed_units() {
        assert_relative_eq!(rps(1).convert(RADPS), TAU, max_relative = 1e-12);
        assert_relative_eq!(rpm(60).convert(RPS), 1.0, max_relative = 1e-12);
        assert_relative_eq!(rps(1).convert(DEGPS), 360.0, max_relative = 1e-12);
    }

    #[test]
    fn per_minute_chain() {
        assert_relative_eq!(rpm2(3600).convert(RPS2), 1.0, max_relative = 1e-12);
        assert_relative_eq!(rpm3(216_000).convert(RPS3), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn integrate_back_to_angle() {
        let alpha = degps2(10);
        let omega: QAngularSpeed = alpha * sec(3);
        let theta: QAngle = omega * sec(2);
        assert_abs_diff_eq!(theta.convert(deg(1)), 60.0, epsilon = 1e-9);
        assert_relative_eq!((radps3(2) * sec(1)).convert(RADPS2), 2.0, max_relative = 1e-12);
        assert_relative_eq!(degps3(1).convert(DEGPS2 / SECOND), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", radps(2)), "2 s^-1*rad");
        assert_eq!(format!("{}", radps2(1)), "1 s^-2*rad");
    }
}
