//! Path curvature and turning radius.
//!
//! [`QRadius`] is metres per radian: structurally a length divided by an angle, kept as its own named quantity so
//! that turning radii are not confused with plain distances. [`to_radius`] is the explicit conversion from a length.

use super::angular::DEGREE;
use super::length::{QLength, METER};
use rquantity_derive::quantity_type;

quantity_type! {
    /// Curvature (heading change per distance travelled).
    0, -1, 0, 1, QCurvature
}

quantity_type! {
    /// Turning radius (distance travelled per radian of heading change).
    0, 1, 0, -1, QRadius
}

/// Radians per metre.
pub const RADPM: QCurvature = QCurvature::new(1.0);
/// Degrees per metre.
pub const DEGPM: QCurvature = DEGREE.per(METER);

/// Metres per radian.
pub const MPRAD: QRadius = QRadius::new(1.0);

crate::unit_literals!(QCurvature {
    radpm => RADPM,
    degpm => DEGPM,
});

crate::unit_literals!(QRadius {
    mprad => MPRAD,
});

/// Reinterprets a length as a turning radius, keeping the magnitude.
///
/// ```rust
/// use rquantity_core::curvature::{to_radius, MPRAD};
/// use rquantity_core::length::m;
///
/// assert_eq!(to_radius(m(2)).convert(MPRAD), 2.0);
/// ```
#[inline]
pub fn to_radius(length: QLength) -> QRadius {
    QRadius::new(length.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angular::{QAngle, DEGREE};
    use crate::length::m;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;

    #[test]
    fn degpm_in_radpm() {
        assert_abs_diff_eq!(degpm(1).convert(RADPM), PI / 180.0, epsilon = 1e-15);
        assert_abs_diff_eq!(degpm(1.0).convert(radpm(1.0)), 0.017_453_293, epsilon = 1e-9);
    }

    #[test]
    fn heading_change_over_arc() {
        let kappa = degpm(3);
        let heading: QAngle = kappa * m(30);
        assert_abs_diff_eq!(heading.convert(DEGREE), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn radius_inverts_curvature() {
        let r: QRadius = 1.0 / radpm(0.25);
        assert_abs_diff_eq!(r.convert(MPRAD), 4.0, epsilon = 1e-12);
        assert_eq!(to_radius(m(1.5)), mprad(1.5));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", radpm(1)), "1 m^-1*rad");
        assert_eq!(format!("{}", mprad(2)), "2 m*rad^-1");
    }
}
