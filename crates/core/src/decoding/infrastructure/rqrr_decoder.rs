use crate::decoding::domain::payload_decoder::PayloadDecoder;
use crate::shared::frame::Frame;

/// QR decoder backed by rqrr's pure-Rust grid detector.
///
/// Multiple codes in one frame each yield a payload, in grid-detection
/// order. Grids that are located but fail content decoding (damaged or
/// partially occluded codes) are skipped rather than treated as errors.
#[derive(Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for RqrrDecoder {
    fn decode(&mut self, frame: &Frame) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let mut prepared = rqrr::PreparedImage::prepare(frame.to_luma());
        let grids = prepared.detect_grids();
        let mut payloads = Vec::with_capacity(grids.len());
        for grid in grids {
            match grid.decode() {
                Ok((_meta, content)) => payloads.push(content),
                Err(e) => log::debug!("skipping undecodable grid: {e}"),
            }
        }
        Ok(payloads)
    }
}
