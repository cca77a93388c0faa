//! Blob location in a cleaned binary mask.
//!
//! Only outermost boundaries compete: internal holes belong to whichever
//! blob surrounds them and are ignored.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::point::Point;

use super::circle::min_enclosing_circle;

/// The selected target blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Blob {
    /// Integer centroid (x, y) from the first-order polygon moments.
    pub centroid: [i32; 2],
    /// Minimal enclosing circle radius of the blob contour, pixels.
    pub radius: f32,
    /// Contour area (Green's theorem), square pixels.
    pub area: f64,
}

/// Signed shoelace area of a closed contour.
fn signed_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc: i64 = 0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        acc += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    acc as f64 / 2.0
}

/// Polygon centroid from the first-order moments, truncated to integer
/// pixel coordinates. `None` when the area-like zeroth moment vanishes
/// (single points, zero-thickness contours): that guards the division.
fn centroid(points: &[Point<i32>]) -> Option<[i32; 2]> {
    let area = signed_area(points);
    if area == 0.0 {
        return None;
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        let cross = p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
        cx += (p.x as f64 + q.x as f64) * cross;
        cy += (p.y as f64 + q.y as f64) * cross;
    }
    cx /= 6.0 * area;
    cy /= 6.0 * area;
    Some([cx as i32, cy as i32])
}

/// Locate the largest external blob in a binary mask.
///
/// The largest contour by area wins; ties keep the contour encountered
/// first in the extraction order. Empty masks and degenerate zero-area
/// contours yield `None`; this never fails otherwise.
pub(crate) fn locate_blob(mask: &GrayImage) -> Option<Blob> {
    let contours: Vec<Contour<i32>> = find_contours(mask);

    let mut best: Option<(&Contour<i32>, f64)> = None;
    for contour in &contours {
        if contour.border_type != BorderType::Outer {
            continue;
        }
        let area = signed_area(&contour.points).abs();
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((contour, area)),
        }
    }

    let (contour, area) = best?;
    let centroid = centroid(&contour.points)?;
    let radius = min_enclosing_circle(&contour.points).radius as f32;
    Some(Blob {
        centroid,
        radius,
        area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::segment::MASK_SET;
    use image::Luma;

    fn mask_with_disk(w: u32, h: u32, cx: f32, cy: f32, r: f32) -> GrayImage {
        let mut mask = GrayImage::new(w, h);
        paint_disk(&mut mask, cx, cy, r);
        mask
    }

    fn paint_disk(mask: &mut GrayImage, cx: f32, cy: f32, r: f32) {
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    mask.put_pixel(x, y, Luma([MASK_SET]));
                }
            }
        }
    }

    #[test]
    fn empty_mask_yields_none() {
        assert_eq!(locate_blob(&GrayImage::new(32, 32)), None);
    }

    #[test]
    fn single_pixel_contour_is_degenerate() {
        let mut mask = GrayImage::new(16, 16);
        mask.put_pixel(8, 8, Luma([MASK_SET]));
        assert_eq!(locate_blob(&mask), None);
    }

    #[test]
    fn disk_centroid_and_radius_are_recovered() {
        let mask = mask_with_disk(128, 128, 64.0, 64.0, 20.0);
        let blob = locate_blob(&mask).unwrap();
        assert_eq!(blob.centroid, [64, 64]);
        assert!((blob.radius - 20.0).abs() < 1.5);
        // Boundary-polygon area runs a little under the continuous disk.
        assert!(blob.area > 1000.0 && blob.area < 1350.0);
    }

    #[test]
    fn larger_of_two_blobs_wins() {
        let mut mask = mask_with_disk(256, 128, 60.0, 60.0, 50.0);
        paint_disk(&mut mask, 200.0, 64.0, 5.0);
        let blob = locate_blob(&mask).unwrap();
        assert_eq!(blob.centroid, [60, 60]);
    }

    #[test]
    fn holes_do_not_compete_with_outer_boundaries() {
        // Annulus: outer disk with a punched-out center.
        let mut mask = mask_with_disk(128, 128, 64.0, 64.0, 30.0);
        for y in 0..128u32 {
            for x in 0..128u32 {
                let dx = x as f32 - 64.0;
                let dy = y as f32 - 64.0;
                if dx * dx + dy * dy <= 100.0 {
                    mask.put_pixel(x, y, Luma([0]));
                }
            }
        }
        let blob = locate_blob(&mask).unwrap();
        // The hole is symmetric, so the centroid stays at the ring center.
        assert_eq!(blob.centroid, [64, 64]);
        assert!((blob.radius - 30.0).abs() < 1.5);
    }
}
