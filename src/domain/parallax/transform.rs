// SPDX-License-Identifier: MPL-2.0
//! Linear motion-to-offset transforms.
//!
//! Both transforms are pure: the same `(pitch, roll, magnitude)` always
//! produces the same offset, so re-delivering a sample never accumulates.

use crate::domain::motion::AttitudeSample;
use std::ops::{Add, Neg};

/// A 2D displacement in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns true if both components are within `epsilon` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

/// Which way a layer moves relative to the tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Moves with the tilt; reads as foreground.
    Direct,
    /// Moves against the tilt; reads as recessed.
    Inverse,
}

/// A direction paired with a magnitude (pixels per radian).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxMotion {
    pub direction: Direction,
    pub magnitude: f64,
}

impl ParallaxMotion {
    #[must_use]
    pub const fn direct(magnitude: f64) -> Self {
        Self {
            direction: Direction::Direct,
            magnitude,
        }
    }

    #[must_use]
    pub const fn inverse(magnitude: f64) -> Self {
        Self {
            direction: Direction::Inverse,
            magnitude,
        }
    }

    /// Offset produced by this motion for the given attitude.
    #[must_use]
    pub fn offset(&self, sample: &AttitudeSample) -> Offset {
        match self.direction {
            Direction::Direct => direct_offset(sample.pitch, sample.roll, self.magnitude),
            Direction::Inverse => inverse_offset(sample.pitch, sample.roll, self.magnitude),
        }
    }
}

/// `(roll·m, pitch·m)`: the layer follows the tilt.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn direct_offset(pitch: f64, roll: f64, magnitude: f64) -> Offset {
    Offset::new((roll * magnitude) as f32, (pitch * magnitude) as f32)
}

/// `(−roll·m, −pitch·m)`: the layer counters the tilt.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn inverse_offset(pitch: f64, roll: f64, magnitude: f64) -> Offset {
    Offset::new((-roll * magnitude) as f32, (-pitch * magnitude) as f32)
}
