//! Plane angles.
//!
//! The canonical unit is the radian. Besides the unit constants this module carries the operations that only make
//! sense on angles:
//!
//! - trigonometry on [`QAngle`] returning [`Number`], and its inverses on [`Number`] returning [`QAngle`];
//! - turn constants ([`QAngle::FULL_TURN`], [`QAngle::HALF_TURN`], [`QAngle::QUARTER_TURN`]);
//! - constrained-angle helpers: [`QAngle::wrap_signed`] into `(-π, π]` and [`QAngle::wrap_pos`] into `[0, 2π)`.
//!
//! ```rust
//! use rquantity_core::angular::{deg, DEGREE};
//!
//! let heading = deg(270).wrap_signed();
//! assert!((heading.convert(DEGREE) + 90.0).abs() < 1e-9);
//! assert!((deg(30).sin().value() - 0.5).abs() < 1e-12);
//! ```

use super::unitless::Number;
use crate::float;
use core::f64::consts::{FRAC_PI_2, PI, TAU};
use rquantity_derive::quantity_type;

quantity_type! {
    /// Plane angle.
    0, 0, 0, 1, QAngle
}

/// Radian.
pub const RADIAN: QAngle = QAngle::new(1.0);
/// Degree.
pub const DEGREE: QAngle = RADIAN.mul_scalar(PI / 180.0);
/// Full rotation (360°).
pub const ROTATION: QAngle = DEGREE.mul_scalar(360.0);

crate::unit_literals!(QAngle {
    rad => RADIAN,
    deg => DEGREE,
    rot => ROTATION,
});

impl QAngle {
    /// One full turn, `2π rad`.
    pub const FULL_TURN: Self = Self::new(TAU);
    /// Half a turn, `π rad`.
    pub const HALF_TURN: Self = Self::new(PI);
    /// A quarter turn, `π/2 rad`.
    pub const QUARTER_TURN: Self = Self::new(FRAC_PI_2);

    /// Sine.
    #[inline]
    pub fn sin(self) -> Number {
        Number::new(float::sin(self.value()))
    }

    /// Cosine.
    #[inline]
    pub fn cos(self) -> Number {
        Number::new(float::cos(self.value()))
    }

    /// Tangent.
    #[inline]
    pub fn tan(self) -> Number {
        Number::new(float::tan(self.value()))
    }

    /// Hyperbolic sine.
    #[inline]
    pub fn sinh(self) -> Number {
        Number::new(float::sinh(self.value()))
    }

    /// Hyperbolic cosine.
    #[inline]
    pub fn cosh(self) -> Number {
        Number::new(float::cosh(self.value()))
    }

    /// Hyperbolic tangent.
    #[inline]
    pub fn tanh(self) -> Number {
        Number::new(float::tanh(self.value()))
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(self) -> (Number, Number) {
        (self.sin(), self.cos())
    }

    /// Wrap into `[0, 2π)` using the Euclidean remainder.
    ///
    /// Tiny negative inputs whose remainder rounds up to `2π` map to `0`. `NaN` and `±∞` produce `NaN`.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        let r = float::rem_euclid(self.value(), TAU);
        Self::new(if r >= TAU { 0.0 } else { r })
    }

    /// Wrap into `(-π, π]`.
    ///
    /// *Upper bound is inclusive*; lower bound is exclusive. This is the constrained range used by
    /// [`Vector2D::from_polar`](crate::Vector2D::from_polar).
    ///
    /// ```rust
    /// use rquantity_core::angular::{deg, DEGREE, QAngle};
    /// assert_eq!((-QAngle::HALF_TURN).wrap_signed(), QAngle::HALF_TURN);
    /// assert!((deg(-190).wrap_signed().convert(DEGREE) - 170.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let y = float::rem_euclid(self.value() + PI, TAU) - PI;
        Self::new(if y <= -PI { y + TAU } else { y })
    }

    /// Smallest signed difference `self - other`, in `(-π, π]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }
}

impl Number {
    /// Arc sine. Outside `[-1, 1]` the result is `NaN`.
    #[inline]
    pub fn asin(self) -> QAngle {
        QAngle::new(float::asin(self.value()))
    }

    /// Arc cosine. Outside `[-1, 1]` the result is `NaN`.
    #[inline]
    pub fn acos(self) -> QAngle {
        QAngle::new(float::acos(self.value()))
    }

    /// Arc tangent.
    #[inline]
    pub fn atan(self) -> QAngle {
        QAngle::new(float::atan(self.value()))
    }

    /// Inverse hyperbolic sine.
    #[inline]
    pub fn asinh(self) -> QAngle {
        QAngle::new(float::asinh(self.value()))
    }

    /// Inverse hyperbolic cosine.
    #[inline]
    pub fn acosh(self) -> QAngle {
        QAngle::new(float::acosh(self.value()))
    }

    /// Inverse hyperbolic tangent.
    #[inline]
    pub fn atanh(self) -> QAngle {
        QAngle::new(float::atanh(self.value()))
    }
}
