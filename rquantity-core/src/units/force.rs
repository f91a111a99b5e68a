//! Force and torque.
//!
//! ```rust
//! use rquantity_core::force::{QForce, NEWTON};
//! use rquantity_core::mass::kg;
//! use rquantity_core::velocity::mps2;
//!
//! let f: QForce = kg(2) * mps2(3);
//! assert_eq!(f.convert(NEWTON), 6.0);
//! ```

use super::length::{FOOT, INCH, METER};
use super::mass::{KILOGRAM, POUND};
use super::velocity::{G, MPS2};
use rquantity_derive::quantity_type;

quantity_type! {
    /// Force.
    1, 1, -2, 0, QForce
}

quantity_type! {
    /// Torque (force times lever arm).
    1, 2, -2, 0, QTorque
}

/// Newton.
pub const NEWTON: QForce = KILOGRAM.times(MPS2);
/// Pound-force: one pound under standard gravity.
pub const POUND_FORCE: QForce = POUND.times(G);
/// Kilopond: one kilogram under standard gravity.
pub const KILOPOND: QForce = KILOGRAM.times(G);

/// Newton metre.
pub const NEWTON_METER: QTorque = NEWTON.times(METER);
/// Foot-pound.
pub const FOOT_POUND: QTorque = FOOT.times(POUND_FORCE);
/// Inch-pound.
pub const INCH_POUND: QTorque = INCH.times(POUND_FORCE);

crate::unit_literals!(QForce {
    n => NEWTON,
    lbf => POUND_FORCE,
    kp => KILOPOND,
});

crate::unit_literals!(QTorque {
    nm => NEWTON_METER,
    ftlb => FOOT_POUND,
    inlb => INCH_POUND,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{inch, m};
    use approx::assert_relative_eq;

    #[test]
    fn force_units() {
        assert_relative_eq!(lbf(1).convert(NEWTON), 4.448_221_615_260_5, max_relative = 1e-12);
        assert_relative_eq!(kp(1).convert(NEWTON), 9.806_65, max_relative = 1e-12);
    }

    #[test]
    fn torque_is_force_times_arm() {
        let t: QTorque = n(10) * m(0.5);
        assert_relative_eq!(t.convert(NEWTON_METER), 5.0, max_relative = 1e-12);
        let t: QTorque = lbf(3) * inch(4);
        assert_relative_eq!(t.convert(INCH_POUND), 12.0, max_relative = 1e-12);
        assert_relative_eq!(ftlb(1).convert(INCH_POUND), 12.0, max_relative = 1e-12);
    }

    #[test]
    fn display_uses_base_units() {
        assert_eq!(format!("{}", n(5)), "5 kg*m*s^-2");
        assert_eq!(format!("{}", nm(2)), "2 kg*m^2*s^-2");
    }
}
