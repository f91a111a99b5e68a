//! Two-dimensional vectors of quantities.
//!
//! [`Vector2D<T>`] stores two components of the same type. Every geometric operation is defined for
//! `Vector2D<Quantity<D>>`, so a position vector, a velocity vector and an acceleration vector are distinct types and
//! cannot be mixed by accident.
//!
//! ```rust
//! use rquantity_core::length::{m, METER};
//! use rquantity_core::V2Position;
//!
//! let a = V2Position::new(m(1), m(1));
//! let b = V2Position::new(m(4), m(5));
//! assert!((a.distance(&b).convert(METER) - 5.0).abs() < 1e-12);
//! ```

use crate::dimension::Dimension;
use crate::quantity::Quantity;
use crate::units::angular::QAngle;
use crate::units::length::QLength;
use crate::units::velocity::{QAcceleration, QSpeed};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2-D vector with components `x` and `y`.
///
/// `Default` is the zero vector when `T` defaults to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D<T> {
    x: T,
    y: T,
}

/// Position in the plane.
pub type V2Position = Vector2D<QLength>;
/// Planar velocity.
pub type V2Velocity = Vector2D<QSpeed>;
/// Planar acceleration.
pub type V2Acceleration = Vector2D<QAcceleration>;

impl<T> Vector2D<T> {
    /// Creates a vector from its Cartesian components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vector2D<T> {
    /// The `x` component.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// The `y` component.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }
}

impl<D: Dimension> Vector2D<Quantity<D>> {
    /// Creates a vector from a heading and a length.
    ///
    /// The sign of `magnitude` is dropped and `angle` is first wrapped into `(-π, π]`.
    ///
    /// ```rust
    /// use rquantity_core::angular::deg;
    /// use rquantity_core::length::{m, METER};
    /// use rquantity_core::V2Position;
    ///
    /// let v = V2Position::from_polar(deg(90), m(-2));
    /// assert!(v.x().convert(METER).abs() < 1e-12);
    /// assert!((v.y().convert(METER) - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_polar(angle: QAngle, magnitude: Quantity<D>) -> Self {
        let magnitude = magnitude.abs();
        let (sin, cos) = angle.wrap_signed().sin_cos();
        Self::new(magnitude * cos.value(), magnitude * sin.value())
    }

    /// Dot product as a bare number, in the base units of `D²`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x.value() * other.x.value() + self.y.value() * other.y.value()
    }

    /// Angle from the positive `x` axis, in `(-π, π]`.
    #[inline]
    pub fn theta(&self) -> QAngle {
        self.y.atan2(self.x)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> Quantity<D> {
        self.x.hypot(self.y)
    }

    /// Displacement from `self` to `other`.
    #[inline]
    pub fn vector_to(&self, other: &Self) -> Self {
        *other - *self
    }

    /// Heading of the displacement from `self` to `other`.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> QAngle {
        self.vector_to(other).theta()
    }

    /// Euclidean distance from `self` to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> Quantity<D> {
        self.vector_to(other).magnitude()
    }

    /// Rotates in place by `angle`, keeping the magnitude.
    pub fn rotate_by(&mut self, angle: QAngle) -> &mut Self {
        *self = self.rotated_by(angle);
        self
    }

    /// Points the vector at the absolute heading `angle`, keeping the magnitude.
    pub fn rotate_to(&mut self, angle: QAngle) -> &mut Self {
        *self = self.rotated_to(angle);
        self
    }

    /// Copy of `self` rotated by `angle`.
    #[inline]
    pub fn rotated_by(&self, angle: QAngle) -> Self {
        Self::from_polar(self.theta() + angle, self.magnitude())
    }

    /// Copy of `self` pointing at the absolute heading `angle`.
    #[inline]
    pub fn rotated_to(&self, angle: QAngle) -> Self {
        Self::from_polar(angle, self.magnitude())
    }
}

impl<T: fmt::Display> fmt::Display for Vector2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component-wise operators
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Add<Output = T>> Add for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2D<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Sub<Output = T>> Sub for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: SubAssign> SubAssign for Vector2D<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Neg<Output = T>> Neg for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Mul<f64, Output = T>> Mul<f64> for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<D: Dimension> Mul<Vector2D<Quantity<D>>> for f64 {
    type Output = Vector2D<Quantity<D>>;
    #[inline]
    fn mul(self, rhs: Vector2D<Quantity<D>>) -> Self::Output {
        rhs * self
    }
}

impl<T: MulAssign<f64>> MulAssign<f64> for Vector2D<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Div<f64, Output = T>> Div<f64> for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: DivAssign<f64>> DivAssign<f64> for Vector2D<T> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}
