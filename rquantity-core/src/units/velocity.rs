//! Speed, acceleration and jerk.
//!
//! All constants are quotients of [`length`](super::length) and [`time`](super::time) units, so their dimensions are
//! checked by the compiler rather than written out by hand.
//!
//! ```rust
//! use rquantity_core::length::m;
//! use rquantity_core::time::sec;
//! use rquantity_core::velocity::{QSpeed, KMPH};
//!
//! let v: QSpeed = m(100) / sec(10);
//! assert!((v.convert(KMPH) - 36.0).abs() < 1e-9);
//! ```

use super::length::{CENTIMETER, INCH, KILOMETER, METER, MILE};
use super::time::{HOUR, SECOND};
use rquantity_derive::quantity_type;

quantity_type! {
    /// Linear speed.
    0, 1, -1, 0, QSpeed
}

quantity_type! {
    /// Linear acceleration.
    0, 1, -2, 0, QAcceleration
}

quantity_type! {
    /// Linear jerk.
    0, 1, -3, 0, QJerk
}

/// Metres per second.
pub const MPS: QSpeed = METER.per(SECOND);
/// Centimetres per second.
pub const CMPS: QSpeed = CENTIMETER.per(SECOND);
/// Inches per second.
pub const INPS: QSpeed = INCH.per(SECOND);
/// Miles per hour.
pub const MIPH: QSpeed = MILE.per(HOUR);
/// Kilometres per hour.
pub const KMPH: QSpeed = KILOMETER.per(HOUR);

/// Metres per second squared.
pub const MPS2: QAcceleration = MPS.per(SECOND);
/// Centimetres per second squared.
pub const CMPS2: QAcceleration = CMPS.per(SECOND);
/// Inches per second squared.
pub const INPS2: QAcceleration = INPS.per(SECOND);
/// Standard gravity, `9.80665 m/s²`.
pub const G: QAcceleration = MPS2.mul_scalar(9.806_65);

/// Metres per second cubed.
pub const MPS3: QJerk = METER.per(SECOND.times(SECOND).times(SECOND));
/// Centimetres per second cubed.
pub const CMPS3: QJerk = CMPS2.per(SECOND);
/// Inches per second cubed.
pub const INPS3: QJerk = INPS2.per(SECOND);

crate::unit_literals!(QSpeed {
    mps => MPS,
    cmps => CMPS,
    inps => INPS,
    miph => MIPH,
    kmph => KMPH,
});

crate::unit_literals!(QAcceleration {
    mps2 => MPS2,
    cmps2 => CMPS2,
    inps2 => INPS2,
});

crate::unit_literals!(QJerk {
    mps3 => MPS3,
    cmps3 => CMPS3,
    inps3 => INPS3,
});
