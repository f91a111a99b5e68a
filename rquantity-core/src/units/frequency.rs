//! Frequency.

use super::time::SECOND;
use super::unitless::NUMBER;
use rquantity_derive::quantity_type;

quantity_type! {
    /// Frequency (events per unit time).
    0, 0, -1, 0, QFrequency
}

/// Hertz.
pub const HZ: QFrequency = NUMBER.per(SECOND);

crate::unit_literals!(QFrequency {
    hz => HZ,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{ms, QTime};
    use approx::assert_abs_diff_eq;

    #[test]
    fn period_inverts_frequency() {
        let period: QTime = 1.0 / hz(50);
        assert_abs_diff_eq!(period.convert(ms(1)), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", hz(60)), "60 s^-1");
    }
}
