// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects and the motion-to-offset math.
//! It has no dependencies on external crates (except `std`) so every rule
//! can be tested without a window or a sensor.
//!
//! # Modules
//!
//! - [`motion`]: Attitude readings ([`AttitudeSample`](motion::AttitudeSample))
//! - [`parallax`]: Transforms and layers ([`ParallaxMotion`](parallax::ParallaxMotion),
//!   [`ParallaxLayer`](parallax::ParallaxLayer), [`CardStack`](parallax::CardStack))

pub mod motion;
pub mod parallax;
