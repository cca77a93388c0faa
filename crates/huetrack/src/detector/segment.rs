//! HSV color segmentation.
//!
//! Frames are converted to hue-saturation-value and thresholded against an
//! inclusive component-wise range. HSV separates color identity (hue) from
//! lighting intensity (value), which keeps one threshold usable across
//! lighting changes.

use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

pub(crate) const MASK_SET: u8 = 255;

/// Inclusive HSV bounds for the target color.
///
/// Components use the byte scale common to camera tooling: hue in
/// `[0, 180]` (degrees halved), saturation and value in `[0, 255]`.
/// Ranges do not wrap: a hue interval crossing 180 (deep reds) needs two
/// segmentation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    /// Lower bound [h, s, v], inclusive.
    pub lower: [u8; 3],
    /// Upper bound [h, s, v], inclusive.
    pub upper: [u8; 3],
}

impl ColorRange {
    /// The blue target band used by the reference deployment.
    pub const BLUE: Self = Self {
        lower: [110, 50, 50],
        upper: [130, 255, 255],
    };

    /// `lower <= upper` in every component.
    pub fn is_valid(&self) -> bool {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .all(|(lo, hi)| lo <= hi)
    }

    /// Whether an HSV triple lies within the range, bounds inclusive.
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self::BLUE
    }
}

/// Convert one sRGB pixel to byte-scale HSV.
fn rgb_to_hsv(p: Rgb<u8>) -> [u8; 3] {
    let rgb = Srgb::new(
        p[0] as f32 / 255.0,
        p[1] as f32 / 255.0,
        p[2] as f32 / 255.0,
    );
    let hsv = Hsv::from_color(rgb);
    [
        (hsv.hue.into_positive_degrees() / 2.0).round() as u8,
        (hsv.saturation * 255.0).round() as u8,
        (hsv.value * 255.0).round() as u8,
    ]
}

/// Binary mask (0/255) of pixels whose HSV value lies within `range`.
///
/// Pure transform, deterministic for identical inputs; a zero-area frame
/// yields an empty mask.
pub(crate) fn segment_color(frame: &RgbImage, range: &ColorRange) -> GrayImage {
    imageproc::map::map_colors(frame, |p| {
        if range.contains(rgb_to_hsv(p)) {
            Luma([MASK_SET])
        } else {
            Luma([0u8])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_blue_converts_to_hue_120() {
        assert_eq!(rgb_to_hsv(Rgb([0, 0, 255])), [120, 255, 255]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = ColorRange {
            lower: [110, 50, 50],
            upper: [130, 255, 255],
        };
        assert!(range.contains([110, 50, 50]));
        assert!(range.contains([130, 255, 255]));
        assert!(!range.contains([109, 255, 255]));
        assert!(!range.contains([131, 255, 255]));
        assert!(!range.contains([120, 49, 255]));
    }

    #[test]
    fn inverted_range_is_invalid_and_matches_nothing() {
        let range = ColorRange {
            lower: [130, 50, 50],
            upper: [110, 255, 255],
        };
        assert!(!range.is_valid());
        assert!(!range.contains([120, 128, 128]));
    }

    #[test]
    fn segment_masks_only_in_range_pixels() {
        let mut frame = RgbImage::from_pixel(4, 4, Rgb([0, 255, 0]));
        frame.put_pixel(2, 1, Rgb([0, 0, 255]));

        let mask = segment_color(&frame, &ColorRange::BLUE);
        assert_eq!(mask.get_pixel(2, 1)[0], MASK_SET);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.pixels().filter(|p| p[0] == MASK_SET).count(), 1);
    }

    #[test]
    fn zero_area_frame_yields_empty_mask() {
        let frame = RgbImage::new(0, 0);
        let mask = segment_color(&frame, &ColorRange::BLUE);
        assert_eq!(mask.dimensions(), (0, 0));
    }
}
