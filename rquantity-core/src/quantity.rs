//! Quantity type and its implementations.

use crate::dimension::{
    is_dimensionless, write_unit, DimDiv, DimInv, DimMul, DimPow, Dimension, Dimensionless, Inverse, Power, Product,
    Quotient,
};
use crate::float;
use crate::units::angular::QAngle;
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use typenum::{Integer, NonZero, P1, P2, P3};

/// A quantity tagged with a compile-time dimension.
///
/// `Quantity<D>` wraps an `f64` magnitude, expressed in the base units `kg`, `m`, `s` and `rad`, together with phantom
/// type information about its dimension `D`. Same-dimension operations (`+`, `-`, comparisons) only type-check when the
/// two dimensions are identical, while `*` and `/` compute the resulting dimension at compile time.
///
/// # Examples
///
/// ```rust
/// use rquantity_core::length::{QLength, METER};
/// use rquantity_core::time::{QTime, SECOND};
/// use rquantity_core::velocity::{QSpeed, MPS};
///
/// let d: QLength = 10.0 * METER;
/// let t: QTime = 4.0 * SECOND;
/// let v: QSpeed = d / t;
/// assert_eq!(v.convert(MPS), 2.5);
/// ```
pub struct Quantity<D: Dimension>(f64, PhantomData<D>);

impl<D: Dimension> Quantity<D> {
    /// Zero of this quantity type.
    pub const ZERO: Self = Self::new(0.0);

    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use rquantity_core::length::QLength;
    /// assert!(QLength::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a quantity from a magnitude in base units.
    ///
    /// ```rust
    /// use rquantity_core::length::QLength;
    /// let d = QLength::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw magnitude in base units.
    ///
    /// Prefer [`Self::convert`] when a specific unit is meant.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns how many `unit`s make up this quantity.
    ///
    /// ```rust
    /// use rquantity_core::length::{CENTIMETER, METER};
    /// assert!((METER.convert(CENTIMETER) - 100.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn convert(self, unit: Self) -> f64 {
        self.0 / unit.0
    }

    /// Const addition of two quantities of the same dimension.
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }

    /// Const subtraction of two quantities of the same dimension.
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }

    /// Const multiplication by a scalar. Used to derive secondary unit constants.
    ///
    /// ```rust
    /// use rquantity_core::length::{QLength, MILLIMETER};
    /// const TILE: QLength = MILLIMETER.mul_scalar(600.0);
    /// assert!((TILE.value() - 0.6).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn mul_scalar(self, factor: f64) -> Self {
        Self::new(self.0 * factor)
    }

    /// Const division by a scalar.
    #[inline]
    pub const fn div_scalar(self, divisor: f64) -> Self {
        Self::new(self.0 / divisor)
    }

    /// Const product with a quantity of any dimension.
    ///
    /// ```rust
    /// use rquantity_core::force::QForce;
    /// use rquantity_core::mass::KILOGRAM;
    /// use rquantity_core::velocity::MPS2;
    /// const NEWTON: QForce = KILOGRAM.times(MPS2);
    /// assert_eq!(NEWTON.value(), 1.0);
    /// ```
    #[inline]
    pub const fn times<R: Dimension>(self, rhs: Quantity<R>) -> Quantity<Product<D, R>>
    where
        D: DimMul<R>,
    {
        Quantity::new(self.0 * rhs.0)
    }

    /// Const quotient by a quantity of any dimension.
    ///
    /// ```rust
    /// use rquantity_core::angular::DEGREE;
    /// use rquantity_core::curvature::QCurvature;
    /// use rquantity_core::length::METER;
    /// const DEGPM: QCurvature = DEGREE.per(METER);
    /// assert!((DEGPM.value() - core::f64::consts::PI / 180.0).abs() < 1e-15);
    /// ```
    #[inline]
    pub const fn per<R: Dimension>(self, rhs: Quantity<R>) -> Quantity<Quotient<D, R>>
    where
        D: DimDiv<R>,
    {
        Quantity::new(self.0 / rhs.0)
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(float::abs(self.0))
    }

    /// Sign of the magnitude (same semantics as `f64::signum()`).
    #[inline]
    pub fn signum(self) -> f64 {
        float::signum(self.0)
    }

    /// Returns `true` if the magnitude is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Returns `true` if the magnitude is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the minimum of this quantity and another.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(float::min(self.0, other.0))
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(float::max(self.0, other.0))
    }

    /// Raises the quantity to the rational power `N / R`; every exponent is multiplied by `N / R`.
    ///
    /// ```rust
    /// use rquantity_core::length::{QArea, QLength};
    /// use rquantity_core::typenum::{P1, P2};
    ///
    /// let side = QLength::new(3.0);
    /// let area: QArea = side.pow::<P2, P1>();
    /// assert_eq!(area.value(), 9.0);
    /// ```
    #[inline]
    pub fn pow<N, R>(self) -> Quantity<Power<D, N, R>>
    where
        N: Integer,
        R: Integer + NonZero,
        D: DimPow<N, R>,
    {
        Quantity::new(float::powf(self.0, N::I64 as f64 / R::I64 as f64))
    }

    /// `R`-th root; every exponent is divided by `R`.
    #[inline]
    pub fn root<R>(self) -> Quantity<Power<D, P1, R>>
    where
        R: Integer + NonZero,
        D: DimPow<P1, R>,
    {
        Quantity::new(float::powf(self.0, 1.0 / R::I64 as f64))
    }

    /// Square root; every exponent is halved.
    ///
    /// ```rust
    /// use rquantity_core::length::{QArea, QLength};
    /// let area = QArea::new(16.0);
    /// let side: QLength = area.sqrt();
    /// assert_eq!(side.value(), 4.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Power<D, P1, P2>>
    where
        D: DimPow<P1, P2>,
    {
        Quantity::new(float::sqrt(self.0))
    }

    /// Cube root; every exponent is divided by three.
    #[inline]
    pub fn cbrt(self) -> Quantity<Power<D, P1, P3>>
    where
        D: DimPow<P1, P3>,
    {
        Quantity::new(float::cbrt(self.0))
    }

    /// Square; every exponent is doubled.
    #[inline]
    pub fn square(self) -> Quantity<Power<D, P2, P1>>
    where
        D: DimPow<P2, P1>,
    {
        Quantity::new(self.0 * self.0)
    }

    /// Cube; every exponent is tripled.
    #[inline]
    pub fn cube(self) -> Quantity<Power<D, P3, P1>>
    where
        D: DimPow<P3, P1>,
    {
        Quantity::new(self.0 * self.0 * self.0)
    }

    /// `sqrt(self² + other²)` without intermediate overflow.
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        Self::new(float::hypot(self.0, other.0))
    }

    /// Magnitude of `self` with the sign of `sign`, which may have any dimension.
    #[inline]
    pub fn copysign<S: Dimension>(self, sign: Quantity<S>) -> Self {
        Self::new(float::copysign(self.0, sign.0))
    }

    /// Rounds up to the next multiple of `step`.
    ///
    /// ```rust
    /// use rquantity_core::length::{INCH, QLength};
    /// let l = QLength::new(0.03);
    /// assert!((l.ceil(INCH).convert(INCH) - 2.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn ceil(self, step: Self) -> Self {
        Self::new(float::ceil(self.0 / step.0) * step.0)
    }

    /// Rounds down to the previous multiple of `step`.
    #[inline]
    pub fn floor(self, step: Self) -> Self {
        Self::new(float::floor(self.0 / step.0) * step.0)
    }

    /// Rounds toward zero to a multiple of `step`.
    #[inline]
    pub fn trunc(self, step: Self) -> Self {
        Self::new(float::trunc(self.0 / step.0) * step.0)
    }

    /// Rounds to the nearest multiple of `step` (half away from zero).
    #[inline]
    pub fn round(self, step: Self) -> Self {
        Self::new(float::round(self.0 / step.0) * step.0)
    }

    /// Four-quadrant arc tangent of `self / x`, in `(-π, π]`.
    ///
    /// ```rust
    /// use rquantity_core::length::QLength;
    /// let theta = QLength::new(1.0).atan2(QLength::new(1.0));
    /// assert!((theta.value() - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn atan2(self, x: Self) -> QAngle {
        QAngle::new(float::atan2(self.0, x.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker trait implementations (no bounds on `D` beyond `Dimension`)
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Default for Quantity<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({:?}", self.0)?;
        if !is_dimensionless::<D>() {
            f.write_str(" ")?;
            write_unit::<D>(f)?;
        }
        f.write_str(")")
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        if !is_dimensionless::<D>() {
            f.write_str(" ")?;
            write_unit::<D>(f)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Dimension> Rem for Quantity<D> {
    type Output = Self;
    /// Floating-point remainder (`fmod`): the result has the sign of `self`.
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self::new(self.0 % rhs.0)
    }
}

impl<D: Dimension> Rem<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

impl<'a, D: Dimension> Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + *q)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<D: DimInv> Div<Quantity<D>> for f64 {
    type Output = Quantity<Inverse<D>>;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::new(self / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension-changing operators
// ─────────────────────────────────────────────────────────────────────────────

impl<L: DimMul<R>, R: Dimension> Mul<Quantity<R>> for Quantity<L> {
    type Output = Quantity<Product<L, R>>;
    #[inline]
    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<L: DimDiv<R>, R: Dimension> Div<Quantity<R>> for Quantity<L> {
    type Output = Quantity<Quotient<L, R>>;
    #[inline]
    fn div(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless interop
// ─────────────────────────────────────────────────────────────────────────────

impl From<f64> for Quantity<Dimensionless> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity<Dimensionless>> for f64 {
    #[inline]
    fn from(value: Quantity<Dimensionless>) -> Self {
        value.0
    }
}
