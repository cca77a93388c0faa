//! Frame source boundary.
//!
//! The core consumes an opaque, stateful handle; opening and closing the
//! underlying device is the caller's responsibility, as is serializing
//! access when several threads share one handle.

use image::RgbImage;

use crate::error::Error;

/// A stateful producer of frames (camera handle, video file, ...).
pub trait FrameSource {
    /// Whether the source is open and able to produce frames.
    fn is_ready(&self) -> bool;

    /// Block until the next frame is available and return it.
    ///
    /// May block indefinitely; there is no cancellation or timeout in the
    /// core. Errors abort the surrounding estimate call.
    fn acquire(&mut self) -> Result<RgbImage, Error>;
}

/// A single in-memory frame, replayed on every acquisition.
///
/// Useful for tests and for offline estimation over still images.
pub struct StillSource {
    frame: RgbImage,
}

impl StillSource {
    pub fn new(frame: RgbImage) -> Self {
        Self { frame }
    }
}

impl FrameSource for StillSource {
    fn is_ready(&self) -> bool {
        true
    }

    fn acquire(&mut self) -> Result<RgbImage, Error> {
        Ok(self.frame.clone())
    }
}
