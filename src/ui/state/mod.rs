// SPDX-License-Identifier: MPL-2.0
//! UI-side state kept apart from the application struct.

pub mod spring;

pub use spring::SpringFollower;
