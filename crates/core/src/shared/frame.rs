use image::{GrayImage, RgbImage};

/// A single captured camera frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the scan loop treats
/// pixel data as opaque.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * 3,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grayscale copy in the layout the QR detector expects.
    pub fn to_luma(&self) -> GrayImage {
        let rgb = RgbImage::from_raw(self.width, self.height, self.data.clone())
            .expect("Frame data length must match dimensions");
        image::DynamicImage::ImageRgb8(rgb).into_luma8()
    }

    /// RGBA copy for display surfaces that require an alpha channel.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.data.len() / 3 * 4);
        for px in self.data.chunks_exact(3) {
            rgba.extend_from_slice(px);
            rgba.push(255);
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2 RGB
        let frame = Frame::new(data.clone(), 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2 RGB
        Frame::new(data, 2, 2);
    }

    #[test]
    fn test_to_luma_dimensions_and_extremes() {
        // 2x1: one white pixel, one black pixel
        let data = vec![255, 255, 255, 0, 0, 0];
        let luma = Frame::new(data, 2, 1).to_luma();
        assert_eq!(luma.dimensions(), (2, 1));
        assert_eq!(luma.get_pixel(0, 0).0[0], 255);
        assert_eq!(luma.get_pixel(1, 0).0[0], 0);
    }

    #[test]
    fn test_to_rgba_inserts_opaque_alpha() {
        let data = vec![10, 20, 30, 40, 50, 60];
        let rgba = Frame::new(data, 2, 1).to_rgba();
        assert_eq!(rgba, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::new(vec![100u8; 12], 2, 2);
        let cloned = frame.clone();
        drop(frame);
        assert_eq!(cloned.data()[0], 100);
    }
}
