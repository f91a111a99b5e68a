//! Mass.
//!
//! The canonical unit is the kilogram.

use rquantity_derive::quantity_type;

quantity_type! {
    /// Mass.
    1, 0, 0, 0, QMass
}

/// Kilogram.
pub const KILOGRAM: QMass = QMass::new(1.0);
/// Gram.
pub const GRAM: QMass = KILOGRAM.div_scalar(1000.0);
/// International avoirdupois pound, exactly `0.45359237 kg`.
pub const POUND: QMass = KILOGRAM.mul_scalar(0.453_592_37);

crate::unit_literals!(QMass {
    kg => KILOGRAM,
    g => GRAM,
    lb => POUND,
});
