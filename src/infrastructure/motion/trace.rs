// SPDX-License-Identifier: MPL-2.0
//! Replay of recorded attitude traces.
//!
//! A trace is a TOML file:
//!
//! ```toml
//! interval_ms = 16
//!
//! [[sample]]
//! pitch = 0.1
//! roll = -0.2
//! yaw = 0.0
//!
//! [[sample]]   # no pitch/roll: replays as a missing reading
//! ```
//!
//! Playback is driven by wall time, not by poll count, and loops forever.

use crate::application::port::MotionSource;
use crate::config::DEFAULT_UPDATE_INTERVAL_MS;
use crate::domain::motion::AttitudeSample;
use crate::error::{MotionError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Deserialize)]
struct TraceFile {
    #[serde(default)]
    interval_ms: Option<u64>,
    #[serde(default, rename = "sample")]
    samples: Vec<TraceEntry>,
}

#[derive(Debug, Deserialize)]
struct TraceEntry {
    pitch: Option<f64>,
    roll: Option<f64>,
    yaw: Option<f64>,
}

impl TraceEntry {
    fn to_sample(&self) -> Option<AttitudeSample> {
        Some(AttitudeSample::new(
            self.pitch?,
            self.roll?,
            self.yaw.unwrap_or(0.0),
        ))
    }
}

#[derive(Debug)]
pub struct TraceReplay {
    frames: Vec<Option<AttitudeSample>>,
    interval: Duration,
    started_at: Option<Instant>,
}

impl TraceReplay {
    /// Builds a replay from explicit frames.
    #[must_use]
    pub fn new(frames: Vec<Option<AttitudeSample>>, interval: Duration) -> Self {
        Self {
            frames,
            interval: interval.max(Duration::from_millis(1)),
            started_at: None,
        }
    }

    /// Parses a trace from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] if the text is not a valid trace.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TraceFile = toml::from_str(content)?;
        let interval =
            Duration::from_millis(file.interval_ms.unwrap_or(DEFAULT_UPDATE_INTERVAL_MS));
        let frames = file.samples.iter().map(TraceEntry::to_sample).collect();
        Ok(Self::new(frames, interval))
    }

    /// Loads a trace file from disk.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a config error if
    /// it cannot be parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame index played at `elapsed` since start.
    #[allow(clippy::cast_possible_truncation)]
    fn index_at(&self, elapsed: Duration) -> usize {
        let step = (elapsed.as_nanos() / self.interval.as_nanos()) as usize;
        step % self.frames.len()
    }
}

impl MotionSource for TraceReplay {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn start(&mut self, now: Instant) -> std::result::Result<(), MotionError> {
        if self.frames.is_empty() {
            return Err(MotionError::SensorUnavailable(
                "trace contains no samples".to_string(),
            ));
        }
        self.started_at = Some(now);
        Ok(())
    }

    fn stop(&mut self) {
        self.started_at = None;
    }

    fn read(&mut self, now: Instant) -> Option<AttitudeSample> {
        let started_at = self.started_at?;
        let index = self.index_at(now.saturating_duration_since(started_at));
        self.frames[index]
    }
}
