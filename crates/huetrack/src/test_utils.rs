//! Shared test utilities for image-based unit tests.

use image::{Rgb, RgbImage};

/// Solid blue inside the default target band (HSV [120, 255, 255]).
pub(crate) const TARGET_BLUE: Rgb<u8> = Rgb([0, 0, 255]);

/// Black background, outside every saturated color band.
pub(crate) const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Render a synthetic frame with a single filled color disk.
///
/// Pixels at distance `d` from `center` satisfy:
/// - `disk_pix` if `d <= radius`
/// - `bg_pix`   otherwise
pub(crate) fn draw_disk_image(
    w: u32,
    h: u32,
    center: [f32; 2],
    radius: f32,
    disk_pix: Rgb<u8>,
    bg_pix: Rgb<u8>,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(w, h, bg_pix);
    paint_disk(&mut img, center, radius, disk_pix);
    img
}

/// Paint an additional filled disk onto an existing frame.
pub(crate) fn paint_disk(img: &mut RgbImage, center: [f32; 2], radius: f32, pix: Rgb<u8>) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let dx = x as f32 - center[0];
            let dy = y as f32 - center[1];
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, pix);
            }
        }
    }
}
