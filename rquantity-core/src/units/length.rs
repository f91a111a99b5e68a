//! Length, area and volume.
//!
//! The canonical units are the metre, the square metre and the cubic metre. Imperial units use the international
//! definitions (`1 in = 2.54 cm` exactly).
//!
//! ```rust
//! use rquantity_core::length::{ft, inch, QArea, SQUARE_INCH};
//!
//! let area: QArea = ft(1) * inch(6);
//! assert!((area.convert(SQUARE_INCH) - 72.0).abs() < 1e-9);
//! ```

use rquantity_derive::quantity_type;

quantity_type! {
    /// Length.
    0, 1, 0, 0, QLength
}

quantity_type! {
    /// Area.
    0, 2, 0, 0, QArea
}

quantity_type! {
    /// Volume.
    0, 3, 0, 0, QVolume
}

// ─────────────────────────────────────────────────────────────────────────────
// Length
// ─────────────────────────────────────────────────────────────────────────────

/// Metre.
pub const METER: QLength = QLength::new(1.0);
/// Decimetre.
pub const DECIMETER: QLength = METER.div_scalar(10.0);
/// Centimetre.
pub const CENTIMETER: QLength = METER.div_scalar(100.0);
/// Millimetre.
pub const MILLIMETER: QLength = METER.div_scalar(1000.0);
/// Kilometre.
pub const KILOMETER: QLength = METER.mul_scalar(1000.0);
/// International inch.
pub const INCH: QLength = CENTIMETER.mul_scalar(2.54);
/// International foot.
pub const FOOT: QLength = INCH.mul_scalar(12.0);
/// International yard.
pub const YARD: QLength = FOOT.mul_scalar(3.0);
/// Statute mile.
pub const MILE: QLength = FOOT.mul_scalar(5280.0);
/// Field tile edge, 600 mm.
pub const TILE: QLength = MILLIMETER.mul_scalar(600.0);

// ─────────────────────────────────────────────────────────────────────────────
// Area
// ─────────────────────────────────────────────────────────────────────────────

/// Square metre.
pub const SQUARE_METER: QArea = METER.times(METER);
/// Square centimetre.
pub const SQUARE_CENTIMETER: QArea = CENTIMETER.times(CENTIMETER);
/// Square inch.
pub const SQUARE_INCH: QArea = INCH.times(INCH);
/// Square foot.
pub const SQUARE_FOOT: QArea = FOOT.times(FOOT);

// ─────────────────────────────────────────────────────────────────────────────
// Volume
// ─────────────────────────────────────────────────────────────────────────────

/// Cubic metre.
pub const CUBIC_METER: QVolume = SQUARE_METER.times(METER);
/// Litre (one cubic decimetre).
pub const LITER: QVolume = DECIMETER.times(DECIMETER).times(DECIMETER);
/// Cubic inch.
pub const CUBIC_INCH: QVolume = SQUARE_INCH.times(INCH);

crate::unit_literals!(QLength {
    m => METER,
    dm => DECIMETER,
    cm => CENTIMETER,
    mm => MILLIMETER,
    km => KILOMETER,
    inch => INCH,
    ft => FOOT,
    yd => YARD,
    mi => MILE,
    tile => TILE,
});

crate::unit_literals!(QArea {
    m2 => SQUARE_METER,
    cm2 => SQUARE_CENTIMETER,
    in2 => SQUARE_INCH,
    ft2 => SQUARE_FOOT,
});

crate::unit_literals!(QVolume {
    m3 => CUBIC_METER,
    liter => LITER,
    in3 => CUBIC_INCH,
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit ladder
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn metric_ladder() {
        assert_abs_diff_eq!(km(1).convert(METER), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dm(1).convert(CENTIMETER), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cm(1).convert(MILLIMETER), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn imperial_ladder() {
        assert_abs_diff_eq!(inch(1).convert(CENTIMETER), 2.54, epsilon = 1e-12);
        assert_abs_diff_eq!(ft(1).convert(INCH), 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(yd(1).convert(FOOT), 3.0, epsilon = 1e-12);
        assert_relative_eq!(mi(1).convert(METER), 1609.344, max_relative = 1e-12);
    }

    #[test]
    fn tile_is_600_mm() {
        assert_abs_diff_eq!(tile(6).convert(METER), 3.6, epsilon = 1e-12);
    }

    #[test]
    fn secondary_roundtrip() {
        let width = 17.25 * INCH;
        assert_relative_eq!(inch(width.convert(INCH)).value(), width.value(), max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Area and volume
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn area_units() {
        assert_abs_diff_eq!(m2(1).convert(SQUARE_CENTIMETER), 10_000.0, epsilon = 1e-6);
        assert_relative_eq!(ft2(1).convert(SQUARE_INCH), 144.0, max_relative = 1e-12);
        let a: QArea = m(2) * m(3);
        assert_abs_diff_eq!(a.convert(SQUARE_METER), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn volume_units() {
        assert_relative_eq!(m3(1).convert(LITER), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(liter(1).convert(CUBIC_INCH), 61.023_744_094_732_28, max_relative = 1e-12);
        let v: QVolume = m2(2) * m(0.5);
        assert_abs_diff_eq!(v.convert(CUBIC_METER), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn display_uses_base_units() {
        assert_eq!(format!("{}", m(3)), "3 m");
        assert_eq!(format!("{}", m2(2)), "2 m^2");
        assert_eq!(format!("{}", m3(1)), "1 m^3");
    }
}
