// SPDX-License-Identifier: MPL-2.0
//! Pointer-driven tilt for hosts without an attitude sensor.
//!
//! The cursor's distance from the window center maps linearly to roll
//! (horizontal) and pitch (vertical), reaching `max_tilt` at the edges.

use crate::application::port::{MotionSource, PointerInput};
use crate::domain::motion::AttitudeSample;
use crate::error::MotionError;
use std::time::Instant;

#[derive(Debug)]
pub struct PointerTilt {
    max_tilt: f64,
    running: bool,
    latest: Option<AttitudeSample>,
}

impl PointerTilt {
    #[must_use]
    pub fn new(max_tilt: f64) -> Self {
        Self {
            max_tilt,
            running: false,
            latest: None,
        }
    }

    /// Converts a cursor position into an attitude.
    #[must_use]
    pub fn tilt_for(&self, x: f32, y: f32, width: f32, height: f32) -> AttitudeSample {
        let normalized = |pos: f32, extent: f32| -> f64 {
            if extent <= 0.0 {
                return 0.0;
            }
            let half = f64::from(extent) / 2.0;
            ((f64::from(pos) - half) / half).clamp(-1.0, 1.0)
        };
        AttitudeSample::new(
            normalized(y, height) * self.max_tilt,
            normalized(x, width) * self.max_tilt,
            0.0,
        )
    }
}

impl MotionSource for PointerTilt {
    fn name(&self) -> &'static str {
        "pointer"
    }

    fn start(&mut self, _now: Instant) -> Result<(), MotionError> {
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
        self.latest = None;
    }

    fn read(&mut self, _now: Instant) -> Option<AttitudeSample> {
        if self.running {
            self.latest
        } else {
            None
        }
    }

    fn observe_pointer(&mut self, input: PointerInput) {
        if !self.running {
            return;
        }
        self.latest = Some(match input {
            PointerInput::Moved {
                x,
                y,
                width,
                height,
            } => self.tilt_for(x, y, width, height),
            // Cursor gone: the "device" settles flat.
            PointerInput::Left => AttitudeSample::NEUTRAL,
        });
    }
}
