// SPDX-License-Identifier: MPL-2.0
//! Device attitude sample.

/// A single attitude reading, in radians.
///
/// Only the latest sample is meaningful: the sampler overwrites it on every
/// accepted reading and keeps no history.
///
/// # Example
///
/// ```
/// use parallax_card::domain::motion::AttitudeSample;
///
/// let sample = AttitudeSample::new(0.1, -0.2, 0.0);
/// assert!(!sample.is_neutral());
/// assert!(AttitudeSample::NEUTRAL.is_neutral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeSample {
    /// Rotation around the lateral axis.
    pub pitch: f64,
    /// Rotation around the longitudinal axis.
    pub roll: f64,
    /// Rotation around the vertical axis. Carried through but not used by
    /// any parallax transform.
    pub yaw: f64,
}

impl AttitudeSample {
    /// Device lying flat, no rotation on any axis.
    pub const NEUTRAL: Self = Self {
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
    };

    #[must_use]
    pub const fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Returns true when pitch and roll are both zero.
    ///
    /// Yaw is ignored since it never moves a layer.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.pitch == 0.0 && self.roll == 0.0
    }

    /// Returns true if every component is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.roll.is_finite() && self.yaw.is_finite()
    }

    /// Returns true if pitch or roll differ from `other`.
    ///
    /// Only these two axes trigger a re-render.
    #[must_use]
    pub fn tilt_differs(&self, other: &Self) -> bool {
        self.pitch != other.pitch || self.roll != other.roll
    }
}
