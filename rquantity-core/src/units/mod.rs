//! Predefined named quantities grouped by dimension.
//!
//! Every module follows the same layout: the named quantity type(s) declared with `quantity_type!`, the canonical
//! unit constant (magnitude `1.0`), secondary unit constants derived from it through the `const` unit algebra, and the
//! literal constructor functions generated by [`unit_literals!`](crate::unit_literals).
//!
//! ## Modules
//!
//! - [`unitless`]: [`Number`](unitless::Number), percentages and the `pi` helper.
//! - [`mass`]: mass (kilogram is canonical).
//! - [`time`]: time (second is canonical).
//! - [`length`]: length, area and volume (metre-based).
//! - [`velocity`]: speed, acceleration and jerk built from [`length`] and [`time`].
//! - [`frequency`]: frequency (hertz).
//! - [`force`]: force and torque.
//! - [`angular`]: angles plus trig, wrapping and inverse-trig helpers.
//! - [`angular_velocity`]: angular speed, acceleration and jerk.
//! - [`curvature`]: path curvature and turning radius.

pub mod angular;
pub mod angular_velocity;
pub mod curvature;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod time;
pub mod unitless;
pub mod velocity;
