// SPDX-License-Identifier: MPL-2.0
pub mod overflow;

pub use overflow::{overflow, Overflow};
