/// Scale `(width, height)` to fit within `(max_width, max_height)`,
/// preserving aspect ratio. Frames already inside the box are returned
/// unchanged; scaling only ever shrinks.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    (
        ((width as f64 * scale) as u32).max(1),
        ((height as f64 * scale) as u32).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_frame_is_untouched() {
        assert_eq!(fit_within(200, 100, 240, 320), (200, 100));
    }

    #[test]
    fn test_exact_fit_is_untouched() {
        assert_eq!(fit_within(240, 320, 240, 320), (240, 320));
    }

    #[test]
    fn test_landscape_frame_limited_by_width() {
        // 640x480 into 240x320: width is the binding constraint
        assert_eq!(fit_within(640, 480, 240, 320), (240, 180));
    }

    #[test]
    fn test_portrait_frame_scales_to_box() {
        assert_eq!(fit_within(480, 640, 240, 320), (240, 320));
    }

    #[test]
    fn test_tall_frame_limited_by_height() {
        // scale = min(240/100, 320/1000) = 0.32
        assert_eq!(fit_within(100, 1000, 240, 320), (32, 320));
    }

    #[test]
    fn test_degenerate_aspect_never_collapses_to_zero() {
        let (w, h) = fit_within(10_000, 1, 240, 320);
        assert_eq!(w, 240);
        assert_eq!(h, 1);
        let (w, h) = fit_within(1, 10_000, 240, 320);
        assert_eq!(w, 1);
        assert_eq!(h, 320);
    }
}
