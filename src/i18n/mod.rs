// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files are embedded at build time and selected from the CLI
//! flag, the config file or the OS locale, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
