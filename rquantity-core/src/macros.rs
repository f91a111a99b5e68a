//! Macros for defining literal constructors and unit conversions.

/// Generates literal constructor functions for a named quantity.
///
/// Rust has no user-defined literal suffixes, so each suffix becomes a function taking anything convertible into
/// `f64` (float *and* integer literals) and returning `value × UNIT`:
///
/// ```rust
/// use rquantity_core::length::{QLength, CENTIMETER, METER};
///
/// rquantity_core::unit_literals!(QLength {
///     meters => METER,
///     centis => CENTIMETER,
/// });
///
/// assert_eq!(meters(2), QLength::new(2.0));
/// assert!((centis(150.0).convert(METER) - 1.5).abs() < 1e-12);
/// ```
#[macro_export]
macro_rules! unit_literals {
    ($quantity:ty { $($name:ident => $unit:expr),+ $(,)? }) => {
        $(
            #[doc = concat!("`value` × `", stringify!($unit), "`, as a [`", stringify!($quantity), "`].")]
            #[inline]
            pub fn $name<V: Into<f64>>(value: V) -> $quantity {
                $unit.mul_scalar(value.into())
            }
        )+
    };
}

/// Expresses a quantity in the unit named by a literal constructor.
///
/// `convert_to!(q, degpm)` is shorthand for `q.convert(literals::degpm(1.0))`.
///
/// ```rust
/// use rquantity_core::convert_to;
/// use rquantity_core::literals::m;
///
/// let width = m(1.0);
/// assert!((convert_to!(width, inch) - 39.370_078_740_157_48).abs() < 1e-9);
/// ```
#[macro_export]
macro_rules! convert_to {
    ($quantity:expr, $unit:ident) => {
        $quantity.convert($crate::literals::$unit(1.0))
    };
}
