//! Pixel-to-physical-length conversion.

use crate::{PhysicalOffset, PixelOffset};

const CM_PER_INCH: f64 = 2.54;

/// Convert a pixel displacement to centimeters for a device resolution of
/// `dpi` pixels per inch. Pure arithmetic; no rounding beyond f64.
pub(crate) fn to_physical(offset: PixelOffset, dpi: f64) -> PhysicalOffset {
    let pixels_per_cm = dpi / CM_PER_INCH;
    PhysicalOffset {
        width_cm: offset.dx as f64 / pixels_per_cm,
        height_cm: offset.dy as f64 / pixels_per_cm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_matches_the_closed_form_exactly() {
        let offset = PixelOffset { dx: 120, dy: -100 };
        let physical = to_physical(offset, 72.0);
        let pixels_per_cm = 72.0 / 2.54;
        assert_eq!(physical.width_cm, 120.0 / pixels_per_cm);
        assert_eq!(physical.height_cm, -100.0 / pixels_per_cm);
    }

    #[test]
    fn off_center_reading_in_centimeters() {
        let physical = to_physical(PixelOffset { dx: 120, dy: -100 }, 72.0);
        assert!((physical.width_cm - 4.2333).abs() < 1e-3);
        assert!((physical.height_cm + 3.5278).abs() < 1e-3);
    }

    #[test]
    fn zero_offset_stays_zero() {
        let physical = to_physical(PixelOffset { dx: 0, dy: 0 }, 72.0);
        assert_eq!(physical.width_cm, 0.0);
        assert_eq!(physical.height_cm, 0.0);
    }

    #[test]
    fn higher_dpi_shrinks_the_physical_offset() {
        let at_72 = to_physical(PixelOffset { dx: 144, dy: 0 }, 72.0);
        let at_144 = to_physical(PixelOffset { dx: 144, dy: 0 }, 144.0);
        assert!((at_72.width_cm - 2.0 * at_144.width_cm).abs() < 1e-12);
    }
}
