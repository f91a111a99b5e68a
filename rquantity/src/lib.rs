//! Compile-time dimensional analysis for physical quantities.
//!
//! `rquantity` is the user-facing crate in this workspace. It re-exports the full API from `rquantity-core` and
//! flattens every named-quantity module into the crate root, so `rquantity::QSpeed`, `rquantity::MPS` and
//! `rquantity::mps` are all directly reachable.
//!
//! A value is always a `Quantity<D>`, where `D` is a zero-sized `Dim<M, L, T, A>` carrying the exponents of mass,
//! length, time and angle. Multiplying and dividing quantities computes the new exponents at compile time; adding,
//! subtracting or comparing quantities of different dimensions does not compile.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to seconds).
//! - Derives result dimensions automatically (`m / s` is a speed, `kg * m / s²` is a force).
//! - Makes unit conversion explicit (`q.convert(UNIT)` answers "how many `UNIT`s is `q`").
//! - Ships the units a mobile robot needs: tiles, inches, rpm, degrees per metre, …, plus a typed [`Vector2D`].
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Exponents off the `1/12` lattice; three nested square roots of a length are rejected at compile time.
//! - Serialization, FFI or runtime-tagged dimensions.
//!
//! # Quick start
//!
//! ```rust
//! use rquantity::{inch, sec, QSpeed, MPS};
//!
//! let v: QSpeed = inch(24) / sec(2);
//! assert!((v.convert(MPS) - 0.3048).abs() < 1e-12);
//! ```
//!
//! Products and quotients produce new named quantities:
//!
//! ```rust
//! use rquantity::{kg, mps2, m, QForce, QTorque, NEWTON_METER};
//!
//! let f: QForce = kg(3) * mps2(2);
//! let t: QTorque = f * m(0.5);
//! assert!((t.convert(NEWTON_METER) - 3.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use rquantity::{m, sec};
//!
//! let _ = m(1) + sec(1);
//! ```
//!
//! Comparing different dimensions:
//!
//! ```compile_fail
//! use rquantity::{m, sec};
//!
//! let _ = m(1) < sec(1);
//! ```
//!
//! Converting into a unit of another dimension:
//!
//! ```compile_fail
//! use rquantity::{mps, METER};
//!
//! let _ = mps(1).convert(METER);
//! ```
//!
//! Trigonometry on something that is not an angle:
//!
//! ```compile_fail
//! use rquantity::m;
//!
//! let _ = m(1).sin();
//! ```
//!
//! A root that leaves the `1/12` exponent lattice (length^⅛):
//!
//! ```compile_fail
//! use rquantity::m;
//!
//! let _ = m(256).sqrt().sqrt().sqrt();
//! ```
//!
//! # Modules
//!
//! Named quantities are grouped by dimension under modules (also flattened into the crate root):
//!
//! - `rquantity::unitless` (`Number`, percent, `pi`)
//! - `rquantity::mass`, `rquantity::time`
//! - `rquantity::length` (length, area, volume)
//! - `rquantity::velocity` (speed, acceleration, jerk)
//! - `rquantity::frequency`, `rquantity::force` (force, torque)
//! - `rquantity::angular` (angles, trig, wrapping)
//! - `rquantity::angular_velocity` (angular speed, acceleration, jerk)
//! - `rquantity::curvature` (curvature, turning radius)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `rquantity-core`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! rquantity = { version = "0.3.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Dimensional
//! mistakes are compile errors; arithmetic follows IEEE-754 behavior (NaN and infinities propagate according to the
//! underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use rquantity_core::*;

/// Proc macro used by `rquantity-core` to declare named quantities.
///
/// This macro expands in terms of `crate::Quantity`, `crate::Dim` and `crate::typenum`, so it is intended for use
/// inside `rquantity-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use rquantity_derive::quantity_type;

pub use rquantity_core::units::angular::*;
pub use rquantity_core::units::angular_velocity::*;
pub use rquantity_core::units::curvature::*;
pub use rquantity_core::units::force::*;
pub use rquantity_core::units::frequency::*;
pub use rquantity_core::units::length::*;
pub use rquantity_core::units::mass::*;
pub use rquantity_core::units::time::*;
pub use rquantity_core::units::unitless::*;
pub use rquantity_core::units::velocity::*;
