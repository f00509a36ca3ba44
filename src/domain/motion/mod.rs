// SPDX-License-Identifier: MPL-2.0
//! Motion domain types.

pub mod sample;

pub use sample::AttitudeSample;
