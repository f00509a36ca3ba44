// SPDX-License-Identifier: MPL-2.0
//! Application layer - orchestration between domain and infrastructure.
//!
//! - [`port`]: Traits implemented by infrastructure adapters
//! - [`sampling`]: The screen-owned [`MotionSampler`](sampling::MotionSampler)

pub mod port;
pub mod sampling;

pub use sampling::{MotionSampler, SampleOutcome, SamplerState};
