// SPDX-License-Identifier: MPL-2.0
//! Placeholder for a missing motion sensor.

use crate::application::port::MotionSource;
use crate::domain::motion::AttitudeSample;
use crate::error::MotionError;
use std::time::Instant;

/// A source that never starts. The card stays at rest.
#[derive(Debug)]
pub struct NoSensor {
    reason: String,
}

impl NoSensor {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MotionSource for NoSensor {
    fn name(&self) -> &'static str {
        "none"
    }

    fn start(&mut self, _now: Instant) -> Result<(), MotionError> {
        Err(MotionError::SensorUnavailable(self.reason.clone()))
    }

    fn stop(&mut self) {}

    fn read(&mut self, _now: Instant) -> Option<AttitudeSample> {
        None
    }
}
