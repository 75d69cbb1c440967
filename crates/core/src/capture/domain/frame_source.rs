use thiserror::Error;

use crate::shared::frame::Frame;

/// Failure modes of a camera frame source.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The device could not be opened. Blocking when raised at session
    /// start; later ticks retry the reopen on their own.
    #[error("camera device unavailable: {0}")]
    DeviceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A single read produced no frame. Transient; the next tick tries
    /// again.
    #[error("no frame captured: {0}")]
    NoFrame(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Produces raster frames from a camera device.
///
/// Implementations own the device handle exclusively. The scan session
/// opens it on start, reopens it when found closed, and releases it on
/// stop; the handle is never shared between callers.
pub trait FrameSource {
    /// Opens the device and starts the stream. May be called again after
    /// `release` or a failed open.
    fn open(&mut self) -> Result<(), CaptureError>;

    /// Whether the stream is currently open.
    fn is_open(&self) -> bool;

    /// Pulls one frame. Blocking.
    fn read(&mut self) -> Result<Frame, CaptureError>;

    /// Releases the device handle. Idempotent.
    fn release(&mut self);
}
