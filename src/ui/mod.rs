// SPDX-License-Identifier: MPL-2.0
//! User interface: the card screen and the pieces it is built from.
//!
//! - [`card_screen`] - Card layout, rasters and debug overlay
//! - [`state`] - Spring follower for the displayed tilt
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing, typography
//! - [`notifications`] - Toasts for warnings

pub mod card_screen;
pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod widgets;
