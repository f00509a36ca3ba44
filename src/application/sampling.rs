// SPDX-License-Identifier: MPL-2.0
//! Screen-owned motion sampler.
//!
//! [`MotionSampler`] holds the single current [`AttitudeSample`] and the
//! injected [`MotionSource`]. It is a two-state machine:
//!
//! ```text
//! Inactive --activate()--> Active --deactivate()/drop--> Inactive
//! ```
//!
//! A failed `activate()` leaves the sampler `Inactive` at its current
//! (initially neutral) sample.

use crate::application::port::{MotionSource, PointerInput};
use crate::domain::motion::AttitudeSample;
use crate::error::MotionError;
use std::fmt;
use std::time::Instant;

/// Lifecycle state of the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    Inactive,
    Active,
}

/// What a reading did to the current sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Pitch or roll changed; the card needs a re-render.
    Updated,
    /// Sample overwritten but pitch and roll are the same (yaw may differ).
    Unchanged,
    /// No usable reading; the previous sample is kept.
    Skipped,
    /// The sampler is inactive and did not read.
    Idle,
}

impl SampleOutcome {
    #[must_use]
    pub fn needs_render(self) -> bool {
        self == SampleOutcome::Updated
    }
}

pub struct MotionSampler {
    source: Box<dyn MotionSource>,
    state: SamplerState,
    current: AttitudeSample,
    skipped: u64,
}

impl fmt::Debug for MotionSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionSampler")
            .field("source", &self.source.name())
            .field("state", &self.state)
            .field("current", &self.current)
            .field("skipped", &self.skipped)
            .finish()
    }
}

impl MotionSampler {
    /// Wraps `source`. Nothing is read until [`activate`](Self::activate).
    #[must_use]
    pub fn new(source: Box<dyn MotionSource>) -> Self {
        Self {
            source,
            state: SamplerState::Inactive,
            current: AttitudeSample::NEUTRAL,
            skipped: 0,
        }
    }

    /// Starts the source. Calling this while active is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates the source's start failure; the sampler stays inactive.
    pub fn activate(&mut self, now: Instant) -> Result<(), MotionError> {
        if self.state == SamplerState::Active {
            return Ok(());
        }
        match self.source.start(now) {
            Ok(()) => {
                self.state = SamplerState::Active;
                tracing::info!(source = self.source.name(), "motion sampling started");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(source = self.source.name(), error = %err, "motion source failed to start");
                Err(err)
            }
        }
    }

    /// Stops the source. Calling this while inactive is a no-op.
    pub fn deactivate(&mut self) {
        if self.state == SamplerState::Inactive {
            return;
        }
        self.source.stop();
        self.state = SamplerState::Inactive;
        tracing::info!(
            source = self.source.name(),
            skipped = self.skipped,
            "motion sampling stopped"
        );
    }

    /// Pulls one reading from the source and applies it.
    pub fn poll(&mut self, now: Instant) -> SampleOutcome {
        if self.state == SamplerState::Inactive {
            return SampleOutcome::Idle;
        }
        let reading = self.source.read(now);
        self.accept(reading)
    }

    /// Applies a reading: overwrite unconditionally, or skip if absent.
    ///
    /// Non-finite readings count as absent.
    pub fn accept(&mut self, reading: Option<AttitudeSample>) -> SampleOutcome {
        match reading.filter(AttitudeSample::is_finite) {
            Some(sample) => {
                let changed = sample.tilt_differs(&self.current);
                self.current = sample;
                if changed {
                    SampleOutcome::Updated
                } else {
                    SampleOutcome::Unchanged
                }
            }
            None => {
                self.skipped += 1;
                tracing::debug!(
                    source = self.source.name(),
                    error = %MotionError::SampleMissing,
                    "skipping update"
                );
                SampleOutcome::Skipped
            }
        }
    }

    pub fn observe_pointer(&mut self, input: PointerInput) {
        self.source.observe_pointer(input);
    }

    #[must_use]
    pub fn current(&self) -> AttitudeSample {
        self.current
    }

    #[must_use]
    pub fn state(&self) -> SamplerState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SamplerState::Active
    }

    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Number of readings skipped since creation.
    #[must_use]
    pub fn skipped_count(&self) -> u64 {
        self.skipped
    }
}

impl Drop for MotionSampler {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Replays a fixed list of readings and counts lifecycle calls.
    struct Scripted {
        readings: VecDeque<Option<AttitudeSample>>,
        fail_start: bool,
        stops: Arc<AtomicUsize>,
    }

    impl Scripted {
        fn new(readings: Vec<Option<AttitudeSample>>) -> (Self, Arc<AtomicUsize>) {
            let stops = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    readings: readings.into(),
                    fail_start: false,
                    stops: Arc::clone(&stops),
                },
                stops,
            )
        }
    }

    impl MotionSource for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn start(&mut self, _now: Instant) -> Result<(), MotionError> {
            if self.fail_start {
                Err(MotionError::SensorUnavailable("scripted failure".into()))
            } else {
                Ok(())
            }
        }

        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }

        fn read(&mut self, _now: Instant) -> Option<AttitudeSample> {
            self.readings.pop_front().flatten()
        }
    }

    fn sampler(readings: Vec<Option<AttitudeSample>>) -> (MotionSampler, Arc<AtomicUsize>) {
        let (source, stops) = Scripted::new(readings);
        (MotionSampler::new(Box::new(source)), stops)
    }

    #[test]
    fn starts_inactive_and_neutral() {
        let (sampler, _) = sampler(vec![]);
        assert_eq!(sampler.state(), SamplerState::Inactive);
        assert!(sampler.current().is_neutral());
    }

    #[test]
    fn inactive_sampler_does_not_read() {
        let (mut sampler, _) = sampler(vec![Some(AttitudeSample::new(0.3, 0.3, 0.0))]);
        assert_eq!(sampler.poll(Instant::now()), SampleOutcome::Idle);
        assert!(sampler.current().is_neutral());
    }

    #[test]
    fn readings_overwrite_unconditionally() {
        let first = AttitudeSample::new(0.1, -0.2, 0.5);
        let second = AttitudeSample::new(-0.4, 0.9, 1.0);
        let (mut sampler, _) = sampler(vec![Some(first), Some(second)]);
        sampler.activate(Instant::now()).expect("start");

        assert_eq!(sampler.poll(Instant::now()), SampleOutcome::Updated);
        assert_eq!(sampler.current(), first);
        assert_eq!(sampler.poll(Instant::now()), SampleOutcome::Updated);
        assert_eq!(sampler.current(), second);
    }

    #[test]
    fn missing_reading_keeps_previous_sample() {
        let kept = AttitudeSample::new(0.2, 0.1, 0.0);
        let (mut sampler, _) = sampler(vec![Some(kept), None]);
        sampler.activate(Instant::now()).expect("start");

        sampler.poll(Instant::now());
        assert_eq!(sampler.poll(Instant::now()), SampleOutcome::Skipped);
        assert_eq!(sampler.current(), kept);
        assert_eq!(sampler.skipped_count(), 1);
    }

    #[test]
    fn nan_reading_is_treated_as_missing() {
        let (mut sampler, _) = sampler(vec![]);
        let outcome = sampler.accept(Some(AttitudeSample::new(f64::NAN, 0.0, 0.0)));
        assert_eq!(outcome, SampleOutcome::Skipped);
        assert!(sampler.current().is_neutral());
    }

    #[test]
    fn same_reading_twice_does_not_rerender() {
        let sample = AttitudeSample::new(0.1, 0.1, 0.0);
        let (mut sampler, _) = sampler(vec![]);
        assert_eq!(sampler.accept(Some(sample)), SampleOutcome::Updated);
        assert_eq!(sampler.accept(Some(sample)), SampleOutcome::Unchanged);
        assert_eq!(sampler.current(), sample);
    }

    #[test]
    fn yaw_only_change_is_stored_without_rerender() {
        let (mut sampler, _) = sampler(vec![]);
        sampler.accept(Some(AttitudeSample::new(0.1, 0.1, 0.0)));
        let outcome = sampler.accept(Some(AttitudeSample::new(0.1, 0.1, 2.0)));
        assert_eq!(outcome, SampleOutcome::Unchanged);
        assert!(!outcome.needs_render());
        assert_eq!(sampler.current().yaw, 2.0);
    }

    #[test]
    fn failed_start_stays_inactive_at_neutral() {
        let (mut source, stops) = Scripted::new(vec![Some(AttitudeSample::new(1.0, 1.0, 0.0))]);
        source.fail_start = true;
        let mut sampler = MotionSampler::new(Box::new(source));

        let err = sampler.activate(Instant::now()).expect_err("should fail");
        assert!(matches!(err, MotionError::SensorUnavailable(_)));
        assert_eq!(sampler.poll(Instant::now()), SampleOutcome::Idle);
        assert!(sampler.current().is_neutral());

        drop(sampler);
        assert_eq!(stops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn deactivate_stops_source_once() {
        let (mut sampler, stops) = sampler(vec![]);
        sampler.activate(Instant::now()).expect("start");
        sampler.activate(Instant::now()).expect("second start is a no-op");
        sampler.deactivate();
        sampler.deactivate();
        assert_eq!(stops.load(Ordering::SeqCst), 1);
        assert_eq!(sampler.state(), SamplerState::Inactive);
    }

    #[test]
    fn drop_stops_an_active_source() {
        let (mut sampler, stops) = sampler(vec![]);
        sampler.activate(Instant::now()).expect("start");
        drop(sampler);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }
}
