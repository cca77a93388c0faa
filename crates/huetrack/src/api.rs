//! High-level estimation API.
//!
//! [`Estimator`] is the primary entry point for offset estimation. It
//! wraps an [`EstimateConfig`] and provides convenience methods for the
//! common scenarios (raw frame, frame source).

use image::RgbImage;

use crate::detector::config::EstimateConfig;
use crate::detector::segment::ColorRange;
use crate::error::Error;
use crate::pipeline;
use crate::source::FrameSource;
use crate::Estimate;

/// Primary estimation interface.
///
/// Encapsulates the target color range and pipeline configuration.
/// Create once, estimate on many frames.
///
/// # Examples
///
/// ```
/// use huetrack::Estimator;
/// use image::RgbImage;
///
/// let estimator = Estimator::new();
/// let frame = RgbImage::new(640, 480);
/// let estimate = estimator.estimate_frame(&frame);
/// assert!(!estimate.is_detected());
/// ```
pub struct Estimator {
    config: EstimateConfig,
}

impl Estimator {
    /// Create an estimator with the default configuration: blue target,
    /// 10 px minimum radius, 72 dpi, 640 px working width.
    pub fn new() -> Self {
        Self {
            config: EstimateConfig::default(),
        }
    }

    /// Create an estimator for a specific target color range.
    pub fn with_color_range(color_range: ColorRange) -> Self {
        Self {
            config: EstimateConfig {
                color_range,
                ..Default::default()
            },
        }
    }

    /// Create with full config control.
    pub fn with_config(config: EstimateConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &EstimateConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut EstimateConfig {
        &mut self.config
    }

    /// Estimate the target offset in a single frame.
    ///
    /// The frame is used as-is; no working-width normalization is applied.
    pub fn estimate_frame(&self, frame: &RgbImage) -> Estimate {
        pipeline::estimate_in_frame(frame, &self.config)
    }

    /// Acquire one frame from `source` and estimate it.
    ///
    /// Fails with [`Error::SourceNotReady`] when the source reports
    /// not-ready at call start, and propagates acquisition errors. The
    /// acquired frame is normalized to the configured working width before
    /// estimation.
    pub fn estimate(&self, source: &mut dyn FrameSource) -> Result<Estimate, Error> {
        pipeline::estimate_from_source(source, &self.config)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}
