//! Debug overlay rendering.
//!
//! Drawing is visual debugging only. It is kept out of the pipeline so the
//! detection path stays pure: callers opt in by handing over a frame they
//! own, and nothing drawn here feeds back into any returned value.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::Estimate;

const ENCLOSING_CIRCLE: Rgb<u8> = Rgb([255, 255, 0]);
const CENTROID_DOT: Rgb<u8> = Rgb([255, 0, 0]);
const FRAME_CENTER_DOT: Rgb<u8> = Rgb([0, 0, 255]);

const DOT_RADIUS: i32 = 5;

/// Draw the detection markers onto `frame`: the enclosing circle and
/// centroid dot for a qualifying detection, and the frame-center reference
/// dot in every case.
///
/// `frame` should have the dimensions recorded in `estimate.frame_size`;
/// markers land at the wrong spot otherwise.
pub fn draw_debug_overlay(frame: &mut RgbImage, estimate: &Estimate) {
    if let Some(det) = &estimate.detection {
        let center = (det.center_px[0], det.center_px[1]);
        draw_hollow_circle_mut(frame, center, det.radius_px.round() as i32, ENCLOSING_CIRCLE);
        draw_filled_circle_mut(frame, center, DOT_RADIUS, CENTROID_DOT);
    }
    let (w, h) = frame.dimensions();
    draw_filled_circle_mut(
        frame,
        ((w / 2) as i32, (h / 2) as i32),
        DOT_RADIUS,
        FRAME_CENTER_DOT,
    );
}
