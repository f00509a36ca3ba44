// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between motion input and the
//! card screen.
//!
//! The `App` struct owns the motion sampler, the card screen and the toast
//! manager, and translates messages into sampler reads, spring steps and
//! redraws. Startup failures (unreadable settings, missing artwork, no
//! motion source) become toasts; the window always opens.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::MotionSampler;
use crate::config::{self, Config, MotionSourceKind, DEFAULT_POINTER_MAX_TILT};
use crate::domain::parallax::CardStack;
use crate::error::MotionError;
use crate::i18n::fluent::I18n;
use crate::infrastructure::motion::build_source;
use crate::media::CardArtwork;
use crate::ui::card_screen;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::SpringFollower;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    sampler: MotionSampler,
    /// `None` when the card artwork could not be prepared.
    card: Option<card_screen::State>,
    notifications: notifications::Manager,
    /// Logical window size, used to normalize pointer positions.
    window_size: Size,
    update_interval: Duration,
    /// Timestamp of the previous animation step while the spring moves.
    last_frame: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sampler", &self.sampler)
            .field("has_card", &self.card.is_some())
            .field("window_size", &self.window_size)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 900.0;

/// Builds the window configuration.
///
/// Close requests are routed through `update` so sampling stops before exit.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(
            sizing::WINDOW_MIN_WIDTH,
            sizing::WINDOW_MIN_HEIGHT,
        )),
        icon,
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Toast for a motion failure, carrying the reason when there is one.
fn motion_notification(err: &MotionError) -> Notification {
    let notification = Notification::warning(err.i18n_key());
    match err {
        MotionError::SensorUnavailable(reason) => notification.with_arg("reason", reason.clone()),
        MotionError::SampleMissing => notification,
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::with_config(flags, &config, config_warning), Task::none())
    }

    /// Builds the app from already loaded settings. CLI flags win over
    /// `config`.
    fn with_config(flags: Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let kind = flags
            .motion
            .or(config.motion.source)
            .unwrap_or_default();
        let source = build_source(kind, &config.motion, flags.trace.as_deref());
        let mut sampler = MotionSampler::new(source);
        if let Err(err) = sampler.activate(Instant::now()) {
            notifications.push(motion_notification(&err));
        }

        let spring = SpringFollower::new(
            config.animation.spring_enabled(),
            config.animation.response_secs(),
            config.animation.damping_fraction(),
        );
        // Sources other than the pointer stay within the default range.
        let max_tilt = match kind {
            MotionSourceKind::Pointer => config.motion.pointer_max_tilt(),
            _ => DEFAULT_POINTER_MAX_TILT,
        };

        let card_path = flags
            .card_image
            .as_deref()
            .or(config.card.card_image.as_deref());
        let avatar_path = flags
            .avatar_image
            .as_deref()
            .or(config.card.avatar_image.as_deref());
        let card = CardArtwork::load(card_path, avatar_path)
            .and_then(|(artwork, warnings)| {
                for key in warnings {
                    notifications.push(Notification::warning(key));
                }
                card_screen::State::new(CardStack::default(), &artwork, spring, max_tilt)
            })
            .map_err(|err| {
                tracing::error!(error = %err, "cannot prepare the card");
                notifications.push(Notification::error("notification-render-error"));
            })
            .ok();

        Self {
            i18n,
            sampler,
            card,
            notifications,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            update_interval: config.motion.update_interval(),
            last_frame: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_motion_subscription(
                self.sampler.is_active(),
                self.update_interval,
            ),
            subscription::create_animation_subscription(
                self.card.as_ref().is_some_and(card_screen::State::is_animating),
            ),
            subscription::create_notification_subscription(
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            sampler: &mut self.sampler,
            card: &mut self.card,
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
            last_frame: &mut self.last_frame,
        };

        match message {
            Message::MotionTick(now) => update::handle_motion_tick(&mut ctx, now),
            Message::AnimationFrame(now) => update::handle_animation_frame(&mut ctx, now),
            Message::PointerMoved(position) => update::handle_pointer_moved(&mut ctx, position),
            Message::PointerLeft => update::handle_pointer_left(&mut ctx),
            Message::WindowOpened { size, .. } | Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size)
            }
            Message::ToggleDebug => update::handle_toggle_debug(&mut ctx),
            Message::WindowCloseRequested(id) => {
                tracing::debug!(?id, "close requested");
                update::handle_close_requested(&mut ctx)
            }
            Message::Notification(message) => update::handle_notification(&mut ctx, &message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            sampler: &self.sampler,
            card: self.card.as_ref(),
            notifications: &self.notifications,
        })
    }
}
