//! Pixel displacement from the frame center.

use super::blob::Blob;
use crate::PixelOffset;

/// Signed displacement of `blob` from the frame's geometric center.
///
/// Returns `None` when the blob's enclosing radius is at or below
/// `min_radius_px`; contours that small are more often sensor noise than
/// the target, even when a contour exists. The frame center uses integer
/// floor division.
pub(crate) fn pixel_offset(
    frame_width: u32,
    frame_height: u32,
    blob: &Blob,
    min_radius_px: f32,
) -> Option<PixelOffset> {
    if blob.radius <= min_radius_px {
        return None;
    }
    let center_x = (frame_width / 2) as i32;
    let center_y = (frame_height / 2) as i32;
    Some(PixelOffset {
        dx: blob.centroid[0] - center_x,
        dy: blob.centroid[1] - center_y,
    })
}
