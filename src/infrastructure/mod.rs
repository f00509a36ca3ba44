// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - concrete adapters for application ports.
//!
//! - [`motion`]: Motion sources ([`PointerTilt`](motion::PointerTilt),
//!   [`SimulatedSweep`](motion::SimulatedSweep), [`TraceReplay`](motion::TraceReplay))

pub mod motion;
