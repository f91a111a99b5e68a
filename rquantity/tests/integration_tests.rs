//! Integration-level tests for the `rquantity` facade crate.

use rquantity::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::PI;

// ─────────────────────────────────────────────────────────────────────────────
// Smoke tests per named quantity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_length() {
    assert_abs_diff_eq!(km(1).convert(METER), 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tile(1).convert(INCH), 23.622_047_244_094_49, epsilon = 1e-9);
}

#[test]
fn smoke_test_time() {
    assert_abs_diff_eq!(day(1).convert(SECOND), 86_400.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_mass() {
    assert_abs_diff_eq!(kg(1).convert(GRAM), 1000.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_velocity() {
    let v: QSpeed = km(1) / sec(1);
    assert_abs_diff_eq!(v.convert(MPS), 1000.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_angular_velocity() {
    let w: QAngularSpeed = rot(1) / min(1);
    assert_relative_eq!(w.convert(RPM), 1.0, max_relative = 1e-12);
    assert_relative_eq!(w.convert(RADPS), 2.0 * PI / 60.0, max_relative = 1e-12);
}

#[test]
fn smoke_test_unitless() {
    let n = Number::from(42.0);
    assert_eq!(f64::from(n), 42.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Documented scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn three_four_five_magnitude() {
    let v = V2Position::new(m(3.0), m(4.0));
    assert_abs_diff_eq!(v.magnitude().convert(METER), 5.0, epsilon = 1e-12);
}

#[test]
fn degpm_converted_to_radpm() {
    assert_abs_diff_eq!(degpm(1.0).convert(radpm(1.0)), 0.017_453_293, epsilon = 1e-9);
    assert_abs_diff_eq!(convert_to!(degpm(1.0), radpm), PI / 180.0, epsilon = 1e-15);
}

#[test]
fn polar_roundtrip() {
    let v = V2Position::from_polar(deg(-120), inch(10));
    assert_abs_diff_eq!(v.theta().convert(DEGREE), -120.0, epsilon = 1e-9);
    assert_abs_diff_eq!(v.magnitude().convert(INCH), 10.0, epsilon = 1e-9);
}

#[test]
fn rotation_roundtrip() {
    let v = V2Velocity::new(mps(1.2), mps(-0.7));
    let back = v.rotated_by(deg(73)).rotated_by(deg(-73));
    assert_abs_diff_eq!(back.x().value(), 1.2, epsilon = 1e-12);
    assert_abs_diff_eq!(back.y().value(), -0.7, epsilon = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-module workflows
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn constant_acceleration_kinematics() {
    let a = V2Acceleration::new(mps2(0), -G);
    let v0 = V2Velocity::new(mps(3), mps(4));
    let t = ms(500);

    let v1: V2Velocity = v0 + V2Velocity::new(a.x() * t, a.y() * t);
    assert_abs_diff_eq!(v1.x().convert(MPS), 3.0, epsilon = 1e-12);
    assert_relative_eq!(v1.y().convert(MPS), 4.0 - 0.5 * 9.806_65, max_relative = 1e-12);

    let dx: QLength = v0.x() * t;
    assert_abs_diff_eq!(dx.convert(CENTIMETER), 150.0, epsilon = 1e-9);
}

#[test]
fn arc_length_from_curvature() {
    let kappa: QCurvature = degpm(2);
    let arc: QLength = deg(90) / kappa;
    assert_abs_diff_eq!(arc.convert(METER), 45.0, epsilon = 1e-9);
    let radius: QRadius = 1.0 / kappa;
    assert_relative_eq!(radius.convert(MPRAD), 90.0 / PI, max_relative = 1e-12);
}

#[test]
fn wheel_speed_to_linear_speed() {
    let wheel_radius = to_radius(inch(2));
    let omega = rpm(200);
    let v: QSpeed = omega * wheel_radius;
    assert_relative_eq!(v.convert(INPS), 200.0 * 2.0 * PI * 2.0 / 60.0, max_relative = 1e-12);
}

#[test]
fn energy_like_products() {
    let work = n(10) * m(3);
    let torque = NEWTON_METER.mul_scalar(30.0);
    assert_eq!(work.value(), torque.value());
    let power = work / sec(2);
    assert_eq!(format!("{}", power), "15 kg*m^2*s^-3");
}

#[test]
fn custom_unit_from_const_algebra() {
    const FURLONG: QLength = YARD.mul_scalar(220.0);
    const FORTNIGHT: QTime = DAY.mul_scalar(14.0);
    const FURLONG_PER_FORTNIGHT: QSpeed = FURLONG.per(FORTNIGHT);
    assert_relative_eq!(FURLONG_PER_FORTNIGHT.convert(CMPS), 0.016_630_952_380_952_38, max_relative = 1e-9);
}

#[test]
fn trig_round_trip_through_number() {
    let heading = deg(37);
    let s: Number = heading.sin();
    assert_abs_diff_eq!(s.asin().convert(DEGREE), 37.0, epsilon = 1e-9);
    let heading_back = (s / heading.cos()).atan();
    assert_abs_diff_eq!(heading_back.convert(DEGREE), 37.0, epsilon = 1e-9);
}

#[test]
fn angle_bookkeeping() {
    let a = deg(350);
    let b = deg(20);
    assert_abs_diff_eq!(b.signed_separation(a).convert(DEGREE), 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!((a + b).wrap_pos().convert(DEGREE), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(a.wrap_signed().convert(DEGREE), -10.0, epsilon = 1e-9);
}

#[test]
fn dimensionless_ratios() {
    let ratio: Number = cm(25) / m(1);
    assert_abs_diff_eq!(ratio.convert(PERCENT), 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pi(2), 2.0 * PI, epsilon = 1e-15);
}
