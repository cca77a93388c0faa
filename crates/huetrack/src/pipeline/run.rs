//! Stage orchestration for a single estimate pass.

use image::imageops::FilterType;
use image::RgbImage;

use crate::detector::config::EstimateConfig;
use crate::detector::{blob, morph, offset, segment, units};
use crate::error::Error;
use crate::source::FrameSource;
use crate::{Detection, Estimate};

/// Run the detection stages over one frame, as-is.
pub(crate) fn estimate_in_frame(frame: &RgbImage, config: &EstimateConfig) -> Estimate {
    let (width, height) = frame.dimensions();

    if !config.color_range.is_valid() {
        tracing::warn!("color range has lower > upper; nothing will match");
    }

    let mask = segment::segment_color(frame, &config.color_range);
    let mask = morph::clean_mask(&mask, &config.morph);

    let Some(found) = blob::locate_blob(&mask) else {
        tracing::debug!("no qualifying blob in {}x{} mask", width, height);
        return Estimate::no_detection(width, height);
    };
    tracing::debug!(
        "blob at ({}, {}), r={:.1}px, area={:.0}",
        found.centroid[0],
        found.centroid[1],
        found.radius,
        found.area,
    );

    let Some(offset_px) = offset::pixel_offset(width, height, &found, config.min_radius_px) else {
        tracing::debug!(
            "blob rejected: r={:.1}px at or below the {:.1}px minimum",
            found.radius,
            config.min_radius_px,
        );
        return Estimate::no_detection(width, height);
    };
    let offset_cm = units::to_physical(offset_px, config.dpi);

    Estimate {
        frame_size: [width, height],
        detection: Some(Detection {
            center_px: found.centroid,
            radius_px: found.radius,
            area_px: found.area,
            offset_px,
            offset_cm,
        }),
    }
}

/// Check readiness, acquire one frame, normalize it, and estimate.
pub(crate) fn estimate_from_source(
    source: &mut dyn FrameSource,
    config: &EstimateConfig,
) -> Result<Estimate, Error> {
    if !source.is_ready() {
        return Err(Error::SourceNotReady);
    }
    let frame = source.acquire()?;
    let frame = normalize_width(frame, config.working_width);
    Ok(estimate_in_frame(&frame, config))
}

/// Resize to the canonical working width, preserving aspect ratio.
/// A target of 0, a matching width, or a zero-area frame pass through.
fn normalize_width(frame: RgbImage, target: u32) -> RgbImage {
    let (w, h) = frame.dimensions();
    if target == 0 || w == 0 || h == 0 || w == target {
        return frame;
    }
    let scaled_h = ((h as f64 * target as f64 / w as f64).round() as u32).max(1);
    image::imageops::resize(&frame, target, scaled_h, FilterType::Triangle)
}
