// SPDX-License-Identifier: MPL-2.0
//! Motion input port definition.
//!
//! This module defines the [`MotionSource`] trait. Infrastructure adapters
//! implement it to turn some input (pointer, recorded trace, synthetic
//! sweep) into attitude readings.
//!
//! Sources are pulled, not pushed: the owner calls [`MotionSource::read`]
//! on every sampling tick. This keeps every reading on the UI thread and
//! lets the owner stop a source simply by no longer polling it.

use crate::domain::motion::AttitudeSample;
use crate::error::MotionError;
use std::time::Instant;

/// Pointer activity forwarded to sources that derive tilt from the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Cursor position in logical pixels, with the current viewport size.
    Moved {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Cursor left the window.
    Left,
}

/// A stream of attitude readings with an explicit lifecycle.
pub trait MotionSource: Send {
    /// Short identifier used in logs and the debug readout.
    fn name(&self) -> &'static str;

    /// Begins producing readings.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::SensorUnavailable`] if the source cannot run.
    fn start(&mut self, now: Instant) -> Result<(), MotionError>;

    /// Stops producing readings and releases any held resources.
    fn stop(&mut self);

    /// Returns the current reading, or `None` if this tick has no usable value.
    fn read(&mut self, now: Instant) -> Option<AttitudeSample>;

    /// Receives pointer activity. Sources that ignore the pointer keep the
    /// default no-op.
    fn observe_pointer(&mut self, _input: PointerInput) {}
}
