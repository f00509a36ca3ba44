// SPDX-License-Identifier: MPL-2.0
//! Synthetic attitude stream.
//!
//! Produces a smooth Lissajous sweep from elapsed time, so the effect can
//! be demonstrated (and tested) without any input device.

use crate::application::port::MotionSource;
use crate::config::{SIMULATED_AMPLITUDE, SIMULATED_PERIOD_SECS};
use crate::domain::motion::AttitudeSample;
use crate::error::MotionError;
use std::f64::consts::{FRAC_PI_4, PI, TAU};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SimulatedSweep {
    amplitude: f64,
    period_secs: f64,
    started_at: Option<Instant>,
}

impl Default for SimulatedSweep {
    fn default() -> Self {
        Self::new(SIMULATED_AMPLITUDE, SIMULATED_PERIOD_SECS)
    }
}

impl SimulatedSweep {
    #[must_use]
    pub fn new(amplitude: f64, period_secs: f64) -> Self {
        Self {
            amplitude,
            period_secs: period_secs.max(f64::EPSILON),
            started_at: None,
        }
    }

    /// Attitude at `elapsed` since start.
    ///
    /// Roll follows the base period, pitch runs at 4/3 of it with a phase
    /// lead, and yaw drifts one full turn per ten periods.
    #[must_use]
    pub fn sample_at(&self, elapsed: Duration) -> AttitudeSample {
        let phase = TAU * elapsed.as_secs_f64() / self.period_secs;
        let roll = self.amplitude * phase.sin();
        let pitch = self.amplitude * 0.6 * (phase * 4.0 / 3.0 + FRAC_PI_4).sin();
        let yaw = (phase / 10.0 + PI).rem_euclid(TAU) - PI;
        AttitudeSample::new(pitch, roll, yaw)
    }
}

impl MotionSource for SimulatedSweep {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn start(&mut self, now: Instant) -> Result<(), MotionError> {
        self.started_at = Some(now);
        Ok(())
    }

    fn stop(&mut self) {
        self.started_at = None;
    }

    fn read(&mut self, now: Instant) -> Option<AttitudeSample> {
        let started_at = self.started_at?;
        Some(self.sample_at(now.saturating_duration_since(started_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_starts_with_zero_roll() {
        let sweep = SimulatedSweep::default();
        let sample = sweep.sample_at(Duration::ZERO);
        assert!(sample.roll.abs() < 1e-12);
        assert!(sample.yaw.abs() < 1e-12);
    }

    #[test]
    fn sweep_stays_within_amplitude() {
        let sweep = SimulatedSweep::new(0.35, 6.0);
        for step in 0..600 {
            let sample = sweep.sample_at(Duration::from_millis(step * 17));
            assert!(sample.roll.abs() <= 0.35 + 1e-12);
            assert!(sample.pitch.abs() <= 0.35 + 1e-12);
            assert!(sample.yaw.abs() <= PI + 1e-12);
        }
    }

    #[test]
    fn read_is_deterministic_for_equal_elapsed_time() {
        let t0 = Instant::now();
        let mut a = SimulatedSweep::default();
        let mut b = SimulatedSweep::default();
        a.start(t0).expect("start");
        b.start(t0).expect("start");
        let at = t0 + Duration::from_millis(1234);
        assert_eq!(a.read(at), b.read(at));
    }

    #[test]
    fn stopped_sweep_yields_nothing() {
        let mut sweep = SimulatedSweep::default();
        assert_eq!(sweep.read(Instant::now()), None);
        sweep.start(Instant::now()).expect("start");
        sweep.stop();
        assert_eq!(sweep.read(Instant::now()), None);
    }
}
