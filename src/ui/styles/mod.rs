// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the card screen.

pub mod button;
pub mod container;
