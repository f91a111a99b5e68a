//! Core type system for dimension-checked physical quantities.
//!
//! `rquantity-core` provides a zero-cost dimensional-analysis model:
//!
//! - A *dimension* is a zero-sized marker [`Dim<M, L, T, A>`] carrying the mass, length, time and angle exponents as
//!   `typenum` integers.
//! - A value tagged with a dimension is a [`Quantity<D>`], backed by an `f64` in base units (`kg`, `m`, `s`, `rad`).
//! - `*` and `/` compute the result dimension at compile time; `+`, `-` and comparisons only type-check when both
//!   sides have the same dimension.
//! - Named quantities (`QLength`, `QSpeed`, …) are type aliases at fixed exponents, each with unit constants and
//!   literal constructor functions.
//!
//! Most users should depend on `rquantity` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally inconsistent arithmetic (adding a length to a time, …).
//! - Zero runtime overhead for dimension tags (phantom types only).
//! - Rational exponents from roots and powers, on a lattice of twelfths (`m^1/2`, `s^-1/3`, …).
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Base dimensions beyond mass, length, time and angle.
//! - Exponents that are not multiples of `1/12`; such a `pow`/`root` fails to compile.
//!
//! # Quick start
//!
//! ```rust
//! use rquantity_core::literals::{m, sec};
//! use rquantity_core::velocity::{QSpeed, KMPH};
//!
//! let v: QSpeed = m(100) / sec(8);
//! assert!((v.convert(KMPH) - 45.0).abs() < 1e-9);
//! ```
//!
//! Unit constants are ordinary `const` values, so new units can be derived at compile time:
//!
//! ```rust
//! use rquantity_core::length::{QLength, INCH};
//!
//! const HAND: QLength = INCH.mul_scalar(4.0);
//! assert!((HAND.value() - 0.1016).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `rquantity-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! rquantity-core = { version = "0.3.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Dimensional
//! mistakes are compile errors. Arithmetic is pure `f64` computation; it does not panic on its own, but it follows
//! IEEE-754 behavior (division by zero gives infinities, out-of-domain math such as `asin(2)` gives NaN, and both
//! propagate).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod float;
mod macros;
mod quantity;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    AngleDim, Dim, DimDiv, DimInv, DimMul, DimPow, Dimension, Dimensionless, Inverse, Power, Product, Quotient,
    EXPONENT_SCALE,
};
pub use quantity::Quantity;
pub use vector::{V2Acceleration, V2Position, V2Velocity, Vector2D};

/// Type-level integers used for dimension exponents and `pow`/`root` arguments.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined named quantities (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined named quantities, unit constants and literal constructors.
pub mod units;

pub use units::angular;
pub use units::angular_velocity;
pub use units::curvature;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::time;
pub use units::unitless;
pub use units::velocity;

/// Every literal constructor in one place.
///
/// Rust has no user-defined literal suffixes; `m(3)` and `deg(90.0)` play that role. Glob-importing this module
/// brings them all into scope:
///
/// ```rust
/// use rquantity_core::literals::*;
///
/// let turn = degps(90) * sec(4);
/// assert!((turn.convert(rot(1.0)) - 1.0).abs() < 1e-12);
/// ```
pub mod literals {
    pub use crate::units::angular::{deg, rad, rot};
    pub use crate::units::angular_velocity::{
        degps, degps2, degps3, radps, radps2, radps3, rpm, rpm2, rpm3, rps, rps2, rps3,
    };
    pub use crate::units::curvature::{degpm, mprad, radpm};
    pub use crate::units::force::{ftlb, inlb, kp, lbf, n, nm};
    pub use crate::units::frequency::hz;
    pub use crate::units::length::{cm, cm2, dm, ft, ft2, in2, in3, inch, km, liter, m, m2, m3, mi, mm, tile, yd};
    pub use crate::units::mass::{g, kg, lb};
    pub use crate::units::time::{day, hr, min, ms, sec};
    pub use crate::units::unitless::{number, percent, pi};
    pub use crate::units::velocity::{cmps, cmps2, cmps3, inps, inps2, inps3, kmph, miph, mps, mps2, mps3};
}
