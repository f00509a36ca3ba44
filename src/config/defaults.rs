// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Motion**: Sampling interval and pointer tilt range
//! - **Animation**: Interactive spring parameters
//! - **Simulation**: Sweep amplitude and period for the simulated source

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Default interval between motion readings (about 60 Hz).
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 16;

/// Minimum interval between motion readings.
pub const MIN_UPDATE_INTERVAL_MS: u64 = 8;

/// Maximum interval between motion readings.
pub const MAX_UPDATE_INTERVAL_MS: u64 = 250;

/// Tilt reached when the pointer touches the window edge (radians).
pub const DEFAULT_POINTER_MAX_TILT: f64 = 0.5;

/// Minimum pointer tilt range (radians).
pub const MIN_POINTER_MAX_TILT: f64 = 0.05;

/// Maximum pointer tilt range (radians).
pub const MAX_POINTER_MAX_TILT: f64 = 1.5;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Time for the spring to settle on a new target (seconds).
pub const DEFAULT_SPRING_RESPONSE_SECS: f64 = 0.15;

/// Minimum spring response (seconds).
pub const MIN_SPRING_RESPONSE_SECS: f64 = 0.05;

/// Maximum spring response (seconds).
pub const MAX_SPRING_RESPONSE_SECS: f64 = 1.0;

/// Spring damping ratio; 1.0 is critically damped.
pub const DEFAULT_SPRING_DAMPING: f64 = 0.86;

/// Minimum damping ratio.
pub const MIN_SPRING_DAMPING: f64 = 0.1;

/// Maximum damping ratio.
pub const MAX_SPRING_DAMPING: f64 = 1.0;

// ==========================================================================
// Simulation Defaults
// ==========================================================================

/// Peak tilt of the simulated sweep (radians).
pub const SIMULATED_AMPLITUDE: f64 = 0.35;

/// Period of the simulated roll oscillation (seconds).
pub const SIMULATED_PERIOD_SECS: f64 = 6.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_bounds() {
        assert!((MIN_UPDATE_INTERVAL_MS..=MAX_UPDATE_INTERVAL_MS)
            .contains(&DEFAULT_UPDATE_INTERVAL_MS));
        assert!((MIN_POINTER_MAX_TILT..=MAX_POINTER_MAX_TILT).contains(&DEFAULT_POINTER_MAX_TILT));
        assert!((MIN_SPRING_RESPONSE_SECS..=MAX_SPRING_RESPONSE_SECS)
            .contains(&DEFAULT_SPRING_RESPONSE_SECS));
        assert!((MIN_SPRING_DAMPING..=MAX_SPRING_DAMPING).contains(&DEFAULT_SPRING_DAMPING));
    }
}
