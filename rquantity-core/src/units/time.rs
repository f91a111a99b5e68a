//! Time.
//!
//! The canonical unit is the second.
//!
//! ```rust
//! use rquantity_core::time::{min, SECOND};
//! assert_eq!(min(2).convert(SECOND), 120.0);
//! ```

use rquantity_derive::quantity_type;

quantity_type! {
    /// Time.
    0, 0, 1, 0, QTime
}

/// Second.
pub const SECOND: QTime = QTime::new(1.0);
/// Millisecond.
pub const MSEC: QTime = SECOND.div_scalar(1000.0);
/// Minute.
pub const MINUTE: QTime = SECOND.mul_scalar(60.0);
/// Hour.
pub const HOUR: QTime = MINUTE.mul_scalar(60.0);
/// Day (86 400 s).
pub const DAY: QTime = HOUR.mul_scalar(24.0);

crate::unit_literals!(QTime {
    sec => SECOND,
    ms => MSEC,
    min => MINUTE,
    hr => HOUR,
    day => DAY,
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ladder() {
        assert_eq!(DAY.convert(SECOND), 86_400.0);
        assert_eq!(hr(1).convert(MINUTE), 60.0);
        assert_abs_diff_eq!(ms(250).convert(SECOND), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn secondary_roundtrip() {
        let t = 3.75 * HOUR;
        assert_abs_diff_eq!(hr(t.convert(HOUR)).value(), t.value(), epsilon = 1e-9);
    }

    #[test]
    fn display_in_seconds() {
        assert_eq!(format!("{}", sec(1.5)), "1.5 s");
    }
}
