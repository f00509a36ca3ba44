// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::MotionSourceKind;
use crate::ui::notifications;
use iced::{window, Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Time to read the motion source.
    MotionTick(Instant),
    /// Time to advance the tilt spring.
    AnimationFrame(Instant),
    PointerMoved(Point),
    PointerLeft,
    WindowOpened {
        id: window::Id,
        size: Size,
    },
    WindowResized(Size),
    /// The `D` key toggles the motion readout.
    ToggleDebug,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI. Each one takes precedence over the
/// matching `settings.toml` value.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PARALLAX_CARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    pub motion: Option<MotionSourceKind>,
    /// Motion trace replayed by the `trace` source.
    pub trace: Option<PathBuf>,
    pub card_image: Option<PathBuf>,
    pub avatar_image: Option<PathBuf>,
}
