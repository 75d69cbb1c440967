use chrono::{DateTime, Duration, Local};

use crate::capture::domain::frame_source::{CaptureError, FrameSource};
use crate::decoding::domain::payload_decoder::PayloadDecoder;
use crate::shared::constants::DECODE_INTERVAL_SECS;
use crate::shared::frame::Frame;
use crate::tracking::sighting_log::SightingLog;

/// What one scheduled tick did.
#[derive(Debug)]
pub enum TickOutcome {
    /// The session is stopped; nothing happened.
    Idle,
    /// Inside the decode interval; no capture work was done.
    Throttled,
    /// The device produced no frame this cycle.
    NoFrame,
    /// A frame was captured and at least one payload decoded.
    Decoded {
        frame: Frame,
        payloads: Vec<String>,
    },
    /// A frame was captured but no code was found in it.
    NothingFound { frame: Frame },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Stopped,
    Running,
}

/// Cooperative scan loop: owns the frame source, the decoder, and the
/// sighting log, and advances one decode cycle per scheduled tick.
///
/// The caller provides the timer (GUI subscription, sleep loop) and the
/// current wall-clock time; the session itself never blocks between
/// ticks.
pub struct ScanSession {
    source: Box<dyn FrameSource>,
    decoder: Box<dyn PayloadDecoder>,
    log: SightingLog,
    state: SessionState,
}

impl ScanSession {
    pub fn new(source: Box<dyn FrameSource>, decoder: Box<dyn PayloadDecoder>) -> Self {
        Self {
            source,
            decoder,
            log: SightingLog::new(),
            state: SessionState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn log(&self) -> &SightingLog {
        &self.log
    }

    /// Starts a fresh run: opens the device and clears the previous run's
    /// history. Device unavailability here is the one blocking failure;
    /// the caller decides how to surface it.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        self.source.open()?;
        self.log.reset();
        self.state = SessionState::Running;
        log::info!("scan session started");
        Ok(())
    }

    /// Stops the run and releases the device. The sighting log is frozen
    /// until the next `start`.
    pub fn stop(&mut self) {
        self.source.release();
        self.state = SessionState::Stopped;
        log::info!("scan session stopped");
    }

    /// Advances the loop by one tick.
    ///
    /// Ticks inside the decode interval (measured from the last
    /// successful decode) skip capture work entirely; failed attempts do
    /// not arm the throttle, so the next tick retries immediately. All
    /// capture and decode failures are absorbed into outcomes; nothing
    /// propagates past this boundary.
    pub fn tick(&mut self, now: DateTime<Local>) -> TickOutcome {
        if self.state != SessionState::Running {
            return TickOutcome::Idle;
        }
        if let Some(last) = self.log.last_read() {
            if now - last < Duration::seconds(DECODE_INTERVAL_SECS) {
                return TickOutcome::Throttled;
            }
        }

        if !self.source.is_open() {
            if let Err(e) = self.source.open() {
                log::warn!("camera reopen failed: {e}");
                return TickOutcome::NoFrame;
            }
        }
        let frame = match self.source.read() {
            Ok(frame) => frame,
            Err(e) => {
                log::debug!("frame read failed: {e}");
                return TickOutcome::NoFrame;
            }
        };

        let payloads = match self.decoder.decode(&frame) {
            Ok(payloads) => payloads,
            Err(e) => {
                log::warn!("decoder failed on frame: {e}");
                Vec::new()
            }
        };
        if payloads.is_empty() {
            TickOutcome::NothingFound { frame }
        } else {
            self.log.record(&payloads, now);
            TickOutcome::Decoded { frame, payloads }
        }
    }
}
