// SPDX-License-Identifier: MPL-2.0
//! Damped spring that eases the displayed tilt toward the sampled tilt.
//!
//! Parameterized like an interactive spring: `response` is the period of
//! the undamped oscillation in seconds and `damping_fraction` the ratio to
//! critical damping (1.0 never overshoots). The sampled attitude itself is
//! never modified; only the attitude handed to the compositor follows.

use crate::config::{
    DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_RESPONSE_SECS, MAX_SPRING_DAMPING,
    MAX_SPRING_RESPONSE_SECS, MIN_SPRING_DAMPING, MIN_SPRING_RESPONSE_SECS,
};
use crate::domain::motion::AttitudeSample;
use std::f64::consts::TAU;
use std::time::Duration;

/// Largest integration step; longer frames are subdivided.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;
/// Position error (radians) below which an axis counts as settled.
const REST_DISTANCE: f64 = 1e-4;
/// Velocity (radians/s) below which an axis counts as settled.
const REST_VELOCITY: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Axis {
    position: f64,
    velocity: f64,
    target: f64,
}

impl Axis {
    fn step(&mut self, stiffness: f64, damping: f64, dt: f64) {
        let accel = -stiffness * (self.position - self.target) - damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    fn settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }
}

/// Spring follower for pitch and roll. Yaw is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringFollower {
    pitch: Axis,
    roll: Axis,
    yaw: f64,
    stiffness: f64,
    damping: f64,
    enabled: bool,
}

impl Default for SpringFollower {
    fn default() -> Self {
        Self::new(true, DEFAULT_SPRING_RESPONSE_SECS, DEFAULT_SPRING_DAMPING)
    }
}

impl SpringFollower {
    /// Parameters are clamped to the configurable ranges; non-finite ones
    /// fall back to the defaults. A disabled follower jumps straight to
    /// every target.
    #[must_use]
    pub fn new(enabled: bool, response_secs: f64, damping_fraction: f64) -> Self {
        let finite = |value: f64, default: f64| if value.is_finite() { value } else { default };
        let response = finite(response_secs, DEFAULT_SPRING_RESPONSE_SECS)
            .clamp(MIN_SPRING_RESPONSE_SECS, MAX_SPRING_RESPONSE_SECS);
        let zeta = finite(damping_fraction, DEFAULT_SPRING_DAMPING)
            .clamp(MIN_SPRING_DAMPING, MAX_SPRING_DAMPING);
        let omega = TAU / response;
        Self {
            pitch: Axis::default(),
            roll: Axis::default(),
            yaw: 0.0,
            stiffness: omega * omega,
            damping: 2.0 * zeta * omega,
            enabled,
        }
    }

    /// Sets the attitude to follow.
    pub fn set_target(&mut self, sample: AttitudeSample) {
        self.pitch.target = sample.pitch;
        self.roll.target = sample.roll;
        self.yaw = sample.yaw;
        if !self.enabled {
            self.snap();
        }
    }

    /// Advances the spring by `elapsed`. Returns `true` if the displayed
    /// attitude moved.
    pub fn step(&mut self, elapsed: Duration) -> bool {
        if self.is_settled() {
            return false;
        }
        if !self.enabled {
            self.snap();
            return true;
        }

        let mut remaining = elapsed.as_secs_f64();
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECS);
            self.pitch.step(self.stiffness, self.damping, dt);
            self.roll.step(self.stiffness, self.damping, dt);
            remaining -= dt;
        }
        if self.pitch.settled() && self.roll.settled() {
            self.snap();
        }
        true
    }

    /// Jumps to the target with no residual motion.
    pub fn snap(&mut self) {
        self.pitch.snap();
        self.roll.snap();
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pitch.position == self.pitch.target
            && self.roll.position == self.roll.target
            && self.pitch.velocity == 0.0
            && self.roll.velocity == 0.0
    }

    /// Attitude to draw.
    #[must_use]
    pub fn current(&self) -> AttitudeSample {
        AttitudeSample::new(self.pitch.position, self.roll.position, self.yaw)
    }
}
