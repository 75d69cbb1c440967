use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Local};

/// Whole-hours/whole-minutes breakdown of the gap between a payload's
/// first and most recent sighting. Seconds are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours, {} minutes", self.hours, self.minutes)
    }
}

struct PayloadHistory {
    payload: String,
    sightings: Vec<DateTime<Local>>,
}

/// Timestamped record of every payload decoded in the current run.
///
/// Owned by the scan session and mutated only through `reset` and
/// `record`; queries never change state. Payloads are kept in first-seen
/// order so the rendered history is stable across refreshes.
#[derive(Default)]
pub struct SightingLog {
    entries: Vec<PayloadHistory>,
    index: HashMap<String, usize>,
    first_read: Option<DateTime<Local>>,
    last_read: Option<DateTime<Local>>,
}

impl SightingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all sightings and session timestamps. Called when a new
    /// run starts.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.first_read = None;
        self.last_read = None;
    }

    /// Appends one sighting at `now` for every payload in the input,
    /// creating sequences for payloads seen for the first time.
    ///
    /// Duplicates within one call each append: the decoder may report the
    /// same text from several code regions in a single frame. An empty
    /// input is a complete no-op; it does not touch the session
    /// timestamps.
    pub fn record(&mut self, payloads: &[String], now: DateTime<Local>) {
        if payloads.is_empty() {
            return;
        }
        for payload in payloads {
            match self.index.get(payload) {
                Some(&i) => self.entries[i].sightings.push(now),
                None => {
                    self.index.insert(payload.clone(), self.entries.len());
                    self.entries.push(PayloadHistory {
                        payload: payload.clone(),
                        sightings: vec![now],
                    });
                }
            }
        }
        if self.first_read.is_none() {
            self.first_read = Some(now);
        }
        self.last_read = Some(now);
    }

    /// Timestamp of the very first successful decode of the run.
    pub fn first_read(&self) -> Option<DateTime<Local>> {
        self.first_read
    }

    /// Timestamp of the most recent successful decode.
    pub fn last_read(&self) -> Option<DateTime<Local>> {
        self.last_read
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All sightings of `payload`, in chronological order.
    pub fn sightings(&self, payload: &str) -> Option<&[DateTime<Local>]> {
        self.index
            .get(payload)
            .map(|&i| self.entries[i].sightings.as_slice())
    }

    /// Time between a payload's first and most recent sighting, or `None`
    /// with fewer than two sightings.
    pub fn elapsed_since(&self, payload: &str) -> Option<Elapsed> {
        let sightings = self.sightings(payload)?;
        if sightings.len() < 2 {
            return None;
        }
        let first = sightings.first()?;
        let last = sightings.last()?;
        let secs = (*last - *first).num_seconds();
        Some(Elapsed {
            hours: secs / 3600,
            minutes: secs % 3600 / 60,
        })
    }

    /// History as display lines: one per (payload, sighting) pair, grouped
    /// per payload in first-seen order, then one elapsed line per payload
    /// sighted more than once. Lazy and restartable.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let sightings = self.entries.iter().flat_map(|entry| {
            entry.sightings.iter().map(move |stamp| {
                format!("{}: {}", stamp.format("%Y-%m-%d %H:%M:%S"), entry.payload)
            })
        });
        let elapsed = self.entries.iter().filter_map(|entry| {
            self.elapsed_since(&entry.payload)
                .map(|e| format!("{} - time difference: {e}", entry.payload))
        });
        sightings.chain(elapsed)
    }
}
