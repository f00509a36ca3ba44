// SPDX-License-Identifier: MPL-2.0
//! Motion source adapters implementing [`MotionSource`].
//!
//! - [`PointerTilt`]: cursor position mapped to pitch/roll
//! - [`SimulatedSweep`]: deterministic synthetic sweep
//! - [`TraceReplay`]: recorded TOML trace played back in a loop
//! - [`NoSensor`]: always unavailable

mod pointer;
mod simulated;
mod trace;
mod unavailable;

pub use pointer::PointerTilt;
pub use simulated::SimulatedSweep;
pub use trace::TraceReplay;
pub use unavailable::NoSensor;

use crate::application::port::MotionSource;
use crate::config::{MotionConfig, MotionSourceKind};
use std::path::Path;

/// Builds the source selected by `kind`.
///
/// A trace that cannot be loaded yields a [`NoSensor`] carrying the reason,
/// so the failure surfaces as `SensorUnavailable` when the screen starts.
#[must_use]
pub fn build_source(
    kind: MotionSourceKind,
    config: &MotionConfig,
    trace_path: Option<&Path>,
) -> Box<dyn MotionSource> {
    match kind {
        MotionSourceKind::Pointer => Box::new(PointerTilt::new(config.pointer_max_tilt())),
        MotionSourceKind::Simulated => Box::new(SimulatedSweep::default()),
        MotionSourceKind::Trace => {
            let Some(path) = trace_path.or(config.trace_path.as_deref()) else {
                return Box::new(NoSensor::new("no trace file configured"));
            };
            match TraceReplay::from_path(path) {
                Ok(replay) => {
                    tracing::info!(path = %path.display(), frames = replay.len(), "loaded motion trace");
                    Box::new(replay)
                }
                Err(err) => Box::new(NoSensor::new(format!(
                    "cannot load trace {}: {err}",
                    path.display()
                ))),
            }
        }
        MotionSourceKind::Disabled => Box::new(NoSensor::new("motion input disabled")),
    }
}
