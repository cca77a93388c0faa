//! Morphological mask cleanup.
//!
//! Erosion removes small speckle introduced by sensor noise and compression
//! artifacts; the matching dilation restores the extent the surviving blob
//! lost to erosion.

use image::GrayImage;
use imageproc::morphology::{dilate, erode};

use super::config::MorphParams;

/// Erode then dilate the mask with the configured structuring neighborhood.
///
/// A distance-`k` pass under the configured norm equals `k` iterations of
/// the unit structuring element, so `erode_iters`/`dilate_iters` map
/// directly onto the distance parameter.
pub(crate) fn clean_mask(mask: &GrayImage, params: &MorphParams) -> GrayImage {
    if mask.width() == 0 || mask.height() == 0 {
        return mask.clone();
    }
    let norm = params.neighborhood.norm();
    let eroded = if params.erode_iters > 0 {
        erode(mask, norm, params.erode_iters)
    } else {
        mask.clone()
    };
    if params.dilate_iters > 0 {
        dilate(&eroded, norm, params.dilate_iters)
    } else {
        eroded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::segment::MASK_SET;

    fn speckled_mask(w: u32, h: u32, specks: &[(u32, u32)]) -> GrayImage {
        let mut mask = GrayImage::new(w, h);
        for &(x, y) in specks {
            mask.put_pixel(x, y, image::Luma([MASK_SET]));
        }
        mask
    }

    fn fill_disk(mask: &mut GrayImage, cx: f32, cy: f32, r: f32) {
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    mask.put_pixel(x, y, image::Luma([MASK_SET]));
                }
            }
        }
    }

    #[test]
    fn clean_removes_isolated_specks() {
        let mask = speckled_mask(32, 32, &[(5, 5), (20, 11), (30, 30)]);
        let cleaned = clean_mask(&mask, &MorphParams::default());
        assert!(cleaned.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn clean_preserves_a_large_blob() {
        let mut mask = GrayImage::new(64, 64);
        fill_disk(&mut mask, 32.0, 32.0, 15.0);
        let before = mask.pixels().filter(|p| p[0] == MASK_SET).count();

        let cleaned = clean_mask(&mask, &MorphParams::default());
        let after = cleaned.pixels().filter(|p| p[0] == MASK_SET).count();

        assert_eq!(cleaned.get_pixel(32, 32)[0], MASK_SET);
        // Erode-then-dilate keeps a convex blob close to its original size.
        assert!(after as f64 > before as f64 * 0.9);
        assert!(after <= before + before / 10);
    }

    #[test]
    fn zero_iterations_is_the_identity() {
        let mask = speckled_mask(8, 8, &[(3, 3)]);
        let params = MorphParams {
            erode_iters: 0,
            dilate_iters: 0,
            ..Default::default()
        };
        assert_eq!(clean_mask(&mask, &params), mask);
    }

    #[test]
    fn zero_area_mask_passes_through() {
        let mask = GrayImage::new(0, 0);
        let cleaned = clean_mask(&mask, &MorphParams::default());
        assert_eq!(cleaned.dimensions(), (0, 0));
    }
}
