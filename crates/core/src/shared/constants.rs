use std::time::Duration;

/// Scheduling granularity of the scan loop.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Minimum wall-clock gap between successive decode attempts, in seconds.
/// Decoding is expensive relative to how fast a handheld code moves, so
/// successful reads are rate-limited; failed attempts retry on the next
/// tick.
pub const DECODE_INTERVAL_SECS: i64 = 2;

/// Bounds of the camera preview box (width, height). Frames larger than
/// this are downscaled for display, preserving aspect ratio.
pub const PREVIEW_MAX_WIDTH: u32 = 240;
pub const PREVIEW_MAX_HEIGHT: u32 = 320;
