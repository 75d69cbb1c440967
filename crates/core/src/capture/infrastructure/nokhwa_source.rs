use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use crate::capture::domain::frame_source::{CaptureError, FrameSource};
use crate::shared::frame::Frame;

/// Webcam frame source backed by nokhwa's native capture backend.
///
/// The camera is not touched until `open`; a released source can be
/// reopened with the same device index.
pub struct NokhwaSource {
    index: u32,
    camera: Option<Camera>,
}

impl NokhwaSource {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            camera: None,
        }
    }
}

impl FrameSource for NokhwaSource {
    fn open(&mut self) -> Result<(), CaptureError> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(self.index), requested)
            .map_err(|e| CaptureError::DeviceUnavailable(Box::new(e)))?;
        camera
            .open_stream()
            .map_err(|e| CaptureError::DeviceUnavailable(Box::new(e)))?;
        log::debug!(
            "opened camera {} ({})",
            self.index,
            camera.info().human_name()
        );
        self.camera = Some(camera);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.camera.as_ref().is_some_and(|c| c.is_stream_open())
    }

    fn read(&mut self) -> Result<Frame, CaptureError> {
        let camera = self
            .camera
            .as_mut()
            .ok_or_else(|| CaptureError::NoFrame("stream is not open".into()))?;
        let buffer = camera
            .frame()
            .map_err(|e| CaptureError::NoFrame(Box::new(e)))?;
        let rgb = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CaptureError::NoFrame(Box::new(e)))?;
        let (width, height) = rgb.dimensions();
        Ok(Frame::new(rgb.into_raw(), width, height))
    }

    fn release(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            let _ = camera.stop_stream();
            log::debug!("released camera {}", self.index);
        }
    }
}
