// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the application layer stays
//! independent of concrete inputs.
//!
//! # Available Ports
//!
//! - [`motion`]: Attitude readings with start/stop lifecycle
//!
//! # Design Notes
//!
//! - No Iced types cross a port
//! - Traits are `Send` so sources can be boxed into application state
//! - No `async fn` - callers drive ports from Iced subscriptions

pub mod motion;

pub use motion::{MotionSource, PointerInput};
