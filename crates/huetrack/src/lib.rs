//! huetrack — single-frame colored-target offset estimation.
//!
//! Given one camera frame, the crate locates the largest blob of a
//! configured color and reports how far its center sits from the frame's
//! optical center, in pixels and in centimeters. The pipeline stages are:
//!
//! 1. **Segment** – HSV conversion and inclusive in-range thresholding.
//! 2. **Clean** – morphological erosion then dilation to drop speckle noise.
//! 3. **Locate** – external contours, largest-area blob, polygon-moment
//!    centroid, minimal enclosing circle.
//! 4. **Offset** – signed pixel displacement from the frame center, gated
//!    by a minimum enclosing radius.
//! 5. **Convert** – pixel displacement to centimeters from a DPI prior.
//!
//! Each call is stateless and synchronous: the frame, mask, and candidate
//! blob live only for the duration of one pass, and nothing is shared
//! between invocations. Frame acquisition is the only blocking point.
//!
//! # Public API
//! The stable surface is intentionally small:
//! - [`Estimator`] as the primary entry point
//! - [`EstimateConfig`] and [`ColorRange`] for tuning
//! - [`FrameSource`] for plugging in a camera handle
//! - result structures ([`Estimate`], [`Detection`], [`PixelOffset`],
//!   [`PhysicalOffset`])
//!
//! Pipeline internals are not part of the public surface.

mod annotate;
mod api;
mod detector;
mod error;
mod pipeline;
mod source;
#[cfg(test)]
pub(crate) mod test_utils;

pub use annotate::draw_debug_overlay;
pub use api::Estimator;
pub use detector::config::{EstimateConfig, MorphParams, Neighborhood};
pub use detector::segment::ColorRange;
pub use error::Error;
pub use source::{FrameSource, StillSource};

/// Signed displacement between the blob centroid and the frame center, in
/// pixels. Positive `dx` means the object sits right of center, positive
/// `dy` below it (image coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelOffset {
    pub dx: i32,
    pub dy: i32,
}

/// A pixel displacement expressed in centimeters via the configured DPI.
///
/// Serialized as `{"x": .., "z": ..}`, the record shape expected by the
/// downstream poller that consumes these readings as JSON.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhysicalOffset {
    /// Horizontal offset in centimeters.
    #[serde(rename = "x")]
    pub width_cm: f64,
    /// Vertical offset in centimeters.
    #[serde(rename = "z")]
    pub height_cm: f64,
}

/// A qualifying detection in a single frame.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Detection {
    /// Blob centroid (x, y) in working-frame pixel coordinates.
    pub center_px: [i32; 2],
    /// Minimal enclosing circle radius of the blob contour, pixels.
    pub radius_px: f32,
    /// Contour area (Green's theorem), square pixels.
    pub area_px: f64,
    /// Centroid displacement from the frame center, pixels.
    pub offset_px: PixelOffset,
    /// Centroid displacement from the frame center, centimeters.
    pub offset_cm: PhysicalOffset,
}

/// Result of estimating one frame.
///
/// `detection` is `None` when no qualifying colored object was found this
/// frame: nothing in range, a degenerate zero-area contour, or a blob below
/// the minimum-radius gate. A present detection with a zero offset means
/// the object is exactly centered; the two outcomes never collapse.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Estimate {
    /// Working-frame dimensions [width, height].
    pub frame_size: [u32; 2],
    /// The qualifying blob, if one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<Detection>,
}

impl Estimate {
    /// Construct a no-detection result for a frame with the provided dimensions.
    pub fn no_detection(width: u32, height: u32) -> Self {
        Self {
            frame_size: [width, height],
            detection: None,
        }
    }

    /// Whether a qualifying object was found.
    pub fn is_detected(&self) -> bool {
        self.detection.is_some()
    }

    /// The physical offset, if an object was found.
    pub fn offset_cm(&self) -> Option<PhysicalOffset> {
        self.detection.as_ref().map(|d| d.offset_cm)
    }
}
