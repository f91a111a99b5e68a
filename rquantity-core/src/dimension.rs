//! Dimension types and type-level exponent algebra.
//!
//! A dimension is the zero-sized marker [`Dim<M, L, T, A>`] whose four parameters are `typenum` signed integers: the
//! mass, length, time and angle exponents, each multiplied by [`EXPONENT_SCALE`]. Scaling lets roots produce
//! fractional exponents (length^½ is `P6`) while equality of dimensions stays plain type equality.
//!
//! The traits [`DimMul`], [`DimDiv`], [`DimInv`] and [`DimPow`] compute result dimensions at compile time. They are
//! only implemented when the result is representable, so an unsupported root is a trait-bound error rather than a
//! runtime failure.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use typenum::{Diff, Integer, Negate, NonZero, Prod, Quot, Sum, P12, Z0};

/// Denominator shared by every exponent slot of a [`Dim`].
pub const EXPONENT_SCALE: i64 = 12;

/// Marker trait for dimension tags.
///
/// The associated constants are the *scaled* exponents; divide by [`EXPONENT_SCALE`] for the physical value.
///
/// ```rust
/// use rquantity_core::typenum::{P12, Z0};
/// use rquantity_core::{Dim, Dimension, EXPONENT_SCALE};
///
/// type LengthDim = Dim<Z0, P12, Z0, Z0>;
/// assert_eq!(LengthDim::LENGTH, EXPONENT_SCALE);
/// assert_eq!(LengthDim::MASS, 0);
/// ```
pub trait Dimension {
    /// Scaled mass exponent.
    const MASS: i64;
    /// Scaled length exponent.
    const LENGTH: i64;
    /// Scaled time exponent.
    const TIME: i64;
    /// Scaled angle exponent.
    const ANGLE: i64;
}

/// Dimension tag with scaled exponents `M` (mass), `L` (length), `T` (time) and `A` (angle).
///
/// Never instantiated; it only exists inside [`crate::Quantity`]'s `PhantomData`.
pub struct Dim<M, L, T, A>(PhantomData<(M, L, T, A)>);

impl<M: Integer, L: Integer, T: Integer, A: Integer> Dimension for Dim<M, L, T, A> {
    const MASS: i64 = M::I64;
    const LENGTH: i64 = L::I64;
    const TIME: i64 = T::I64;
    const ANGLE: i64 = A::I64;
}

/// Dimension of pure numbers.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0>;

/// Dimension of plane angles.
pub type AngleDim = Dim<Z0, Z0, Z0, P12>;

// ─────────────────────────────────────────────────────────────────────────────
// Type-level operators
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension of a product: exponents are summed.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of a quotient: exponents are subtracted.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of a reciprocal: exponents are negated.
pub trait DimInv: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension raised to the rational power `N / R`.
///
/// Implemented only when every scaled exponent times `N` is divisible by `R`.
pub trait DimPow<N: Integer, R: Integer + NonZero>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// `A · B`
pub type Product<A, B> = <A as DimMul<B>>::Output;
/// `A / B`
pub type Quotient<A, B> = <A as DimDiv<B>>::Output;
/// `1 / A`
pub type Inverse<A> = <A as DimInv>::Output;
/// `A ^ (N / R)`
pub type Power<A, N, R> = <A as DimPow<N, R>>::Output;

impl<M1, L1, T1, A1, M2, L2, T2, A2> DimMul<Dim<M2, L2, T2, A2>> for Dim<M1, L1, T1, A1>
where
    M1: Integer + Add<M2>,
    L1: Integer + Add<L2>,
    T1: Integer + Add<T2>,
    A1: Integer + Add<A2>,
    M2: Integer,
    L2: Integer,
    T2: Integer,
    A2: Integer,
    Sum<M1, M2>: Integer,
    Sum<L1, L2>: Integer,
    Sum<T1, T2>: Integer,
    Sum<A1, A2>: Integer,
{
    type Output = Dim<Sum<M1, M2>, Sum<L1, L2>, Sum<T1, T2>, Sum<A1, A2>>;
}

impl<M1, L1, T1, A1, M2, L2, T2, A2> DimDiv<Dim<M2, L2, T2, A2>> for Dim<M1, L1, T1, A1>
where
    M1: Integer + Sub<M2>,
    L1: Integer + Sub<L2>,
    T1: Integer + Sub<T2>,
    A1: Integer + Sub<A2>,
    M2: Integer,
    L2: Integer,
    T2: Integer,
    A2: Integer,
    Diff<M1, M2>: Integer,
    Diff<L1, L2>: Integer,
    Diff<T1, T2>: Integer,
    Diff<A1, A2>: Integer,
{
    type Output = Dim<Diff<M1, M2>, Diff<L1, L2>, Diff<T1, T2>, Diff<A1, A2>>;
}

impl<M, L, T, A> DimInv for Dim<M, L, T, A>
where
    M: Integer + Neg,
    L: Integer + Neg,
    T: Integer + Neg,
    A: Integer + Neg,
    Negate<M>: Integer,
    Negate<L>: Integer,
    Negate<T>: Integer,
    Negate<A>: Integer,
{
    type Output = Dim<Negate<M>, Negate<L>, Negate<T>, Negate<A>>;
}

/// Exact `X * N / R`; the `Rem` bound rejects inexact division.
type ScaledPow<X, N, R> = Quot<Prod<X, N>, R>;

impl<M, L, T, A, N, R> DimPow<N, R> for Dim<M, L, T, A>
where
    M: Integer + Mul<N>,
    L: Integer + Mul<N>,
    T: Integer + Mul<N>,
    A: Integer + Mul<N>,
    N: Integer,
    R: Integer + NonZero,
    Prod<M, N>: Div<R> + Rem<R, Output = Z0>,
    Prod<L, N>: Div<R> + Rem<R, Output = Z0>,
    Prod<T, N>: Div<R> + Rem<R, Output = Z0>,
    Prod<A, N>: Div<R> + Rem<R, Output = Z0>,
    ScaledPow<M, N, R>: Integer,
    ScaledPow<L, N, R>: Integer,
    ScaledPow<T, N, R>: Integer,
    ScaledPow<A, N, R>: Integer,
{
    type Output = Dim<ScaledPow<M, N, R>, ScaledPow<L, N, R>, ScaledPow<T, N, R>, ScaledPow<A, N, R>>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit expression formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Base-unit symbols in exponent order.
const BASE_SYMBOLS: [&str; 4] = ["kg", "m", "s", "rad"];

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.abs()
}

/// Writes the base-unit expression of `D`, e.g. `m*s^-2` or `m^1/2`. Writes nothing for [`Dimensionless`].
pub(crate) fn write_unit<D: Dimension>(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let exponents = [D::MASS, D::LENGTH, D::TIME, D::ANGLE];
    let mut first = true;
    for (symbol, scaled) in BASE_SYMBOLS.iter().zip(exponents) {
        if scaled == 0 {
            continue;
        }
        if !first {
            f.write_str("*")?;
        }
        first = false;
        f.write_str(symbol)?;

        let div = gcd(scaled, EXPONENT_SCALE);
        let (num, den) = (scaled / div, EXPONENT_SCALE / div);
        match (num, den) {
            (1, 1) => {}
            (n, 1) => write!(f, "^{}", n)?,
            (n, d) => write!(f, "^{}/{}", n, d)?,
        }
    }
    Ok(())
}

/// Returns `true` if `D` has all-zero exponents.
#[inline]
pub(crate) const fn is_dimensionless<D: Dimension>() -> bool {
    D::MASS == 0 && D::LENGTH == 0 && D::TIME == 0 && D::ANGLE == 0
}
