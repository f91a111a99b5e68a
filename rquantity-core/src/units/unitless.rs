//! Dimensionless quantities.
//!
//! [`Number`] is the only quantity that converts to and from a bare `f64`:
//!
//! ```rust
//! use rquantity_core::unitless::{Number, PERCENT};
//!
//! let ratio = Number::from(0.25);
//! assert_eq!(ratio.convert(PERCENT), 25.0);
//! let raw: f64 = ratio.into();
//! assert_eq!(raw, 0.25);
//! ```

use core::f64::consts::PI;
use rquantity_derive::quantity_type;

quantity_type! {
    /// A pure number (all exponents zero).
    0, 0, 0, 0, Number
}

/// One.
pub const NUMBER: Number = Number::new(1.0);
/// One hundredth.
pub const PERCENT: Number = NUMBER.div_scalar(100.0);

crate::unit_literals!(Number {
    number => NUMBER,
    percent => PERCENT,
});

/// `x · π` as a bare `f64`.
///
/// ```rust
/// use rquantity_core::unitless::pi;
/// assert_eq!(pi(2), 2.0 * core::f64::consts::PI);
/// ```
#[inline]
pub fn pi<V: Into<f64>>(x: V) -> f64 {
    x.into() * PI
}
