//! Estimation configuration.
//!
//! Every tunable the pipeline reads lives here, passed in explicitly so
//! the pipeline itself stays stateless and testable.

use imageproc::distance_transform::Norm;
use serde::{Deserialize, Serialize};

use super::segment::ColorRange;

/// Structuring-neighborhood shape for the morphological cleanup passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// 4-connected cross (L1 unit ball).
    Cross,
    /// 3x3 box (L-infinity unit ball).
    Box,
}

impl Neighborhood {
    pub(crate) fn norm(self) -> Norm {
        match self {
            Self::Cross => Norm::L1,
            Self::Box => Norm::LInf,
        }
    }
}

/// Morphological cleanup parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphParams {
    /// Erosion iterations with the structuring neighborhood.
    pub erode_iters: u8,
    /// Dilation iterations with the same neighborhood.
    pub dilate_iters: u8,
    /// Structuring neighborhood applied per iteration.
    pub neighborhood: Neighborhood,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            erode_iters: 2,
            dilate_iters: 2,
            neighborhood: Neighborhood::Box,
        }
    }
}

/// Configuration for a full estimate pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Inclusive HSV range of the target color.
    pub color_range: ColorRange,
    /// Mask cleanup parameters.
    pub morph: MorphParams,
    /// Blobs whose enclosing radius is at or below this threshold are
    /// rejected: contours that small are more often sensor noise than the
    /// target.
    pub min_radius_px: f32,
    /// Device resolution prior, pixels per inch, for the centimeter
    /// conversion.
    pub dpi: f64,
    /// Canonical working width frames are normalized to before detection;
    /// 0 disables normalization. Height follows the source aspect ratio.
    pub working_width: u32,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            color_range: ColorRange::default(),
            morph: MorphParams::default(),
            min_radius_px: 10.0,
            dpi: 72.0,
            working_width: 640,
        }
    }
}
