use crate::shared::frame::Frame;

/// Decodes machine-readable codes out of a raster frame.
///
/// Implementations wrap a specific detection library; the scan session
/// only cares about the decoded text payloads. An empty vec means nothing
/// was found in the frame, which is a normal outcome rather than an
/// error.
pub trait PayloadDecoder {
    fn decode(&mut self, frame: &Frame) -> Result<Vec<String>, Box<dyn std::error::Error>>;
}
