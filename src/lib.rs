// SPDX-License-Identifier: MPL-2.0
//! `parallax_card` renders a share card whose layers shift with device tilt,
//! built with the Iced GUI framework.
//!
//! Attitude readings come from a pluggable motion source (pointer, recorded
//! trace, synthetic sweep). The pure parallax model in [`domain`] maps each
//! reading to per-layer offsets and zoom, and [`media`] composites the
//! layers into the card raster.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod infrastructure;
pub mod media;
pub mod ui;
