// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the top-level update loop.

use super::subscription::ANIMATION_FRAME;
use crate::application::port::PointerInput;
use crate::application::{MotionSampler, SampleOutcome};
use crate::error::Error;
use crate::ui::card_screen;
use crate::ui::notifications::{self, Notification};
use iced::{Point, Size, Task};
use std::time::{Duration, Instant};

/// Longest step fed to the spring after a stall (window hidden, slow frame).
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Mutable view of the [`App`](super::App) fields the handlers touch.
pub struct UpdateContext<'a> {
    pub sampler: &'a mut MotionSampler,
    pub card: &'a mut Option<card_screen::State>,
    pub notifications: &'a mut notifications::Manager,
    pub window_size: &'a mut Size,
    pub last_frame: &'a mut Option<Instant>,
}

fn report_render_error(notifications: &mut notifications::Manager, err: &Error) {
    tracing::error!(error = %err, "card render failed");
    notifications.push(Notification::error("notification-render-error"));
}

/// Reads the motion source and retargets the card when the tilt moved.
pub fn handle_motion_tick<Message>(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.sampler.poll(now) != SampleOutcome::Updated {
        return Task::none();
    }
    let Some(card) = ctx.card.as_mut() else {
        return Task::none();
    };
    if let Err(err) = card.set_target(ctx.sampler.current()) {
        report_render_error(ctx.notifications, &err);
    }
    Task::none()
}

/// Time since the previous animation frame, capped at [`MAX_FRAME_STEP`].
pub(super) fn frame_step(last_frame: Option<Instant>, now: Instant) -> Duration {
    last_frame
        .map_or(ANIMATION_FRAME, |previous| now.saturating_duration_since(previous))
        .min(MAX_FRAME_STEP)
}

/// Advances the spring by the time elapsed since the previous frame.
pub fn handle_animation_frame<Message>(
    ctx: &mut UpdateContext<'_>,
    now: Instant,
) -> Task<Message> {
    let Some(card) = ctx.card.as_mut() else {
        return Task::none();
    };
    let step = frame_step(*ctx.last_frame, now);
    if let Err(err) = card.animate(step) {
        report_render_error(ctx.notifications, &err);
    }
    *ctx.last_frame = card.is_animating().then_some(now);
    Task::none()
}

pub fn handle_pointer_moved<Message>(ctx: &mut UpdateContext<'_>, position: Point) -> Task<Message> {
    ctx.sampler.observe_pointer(PointerInput::Moved {
        x: position.x,
        y: position.y,
        width: ctx.window_size.width,
        height: ctx.window_size.height,
    });
    Task::none()
}

pub fn handle_pointer_left<Message>(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.sampler.observe_pointer(PointerInput::Left);
    Task::none()
}

pub fn handle_window_resized<Message>(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    Task::none()
}

pub fn handle_toggle_debug<Message>(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(card) = ctx.card.as_mut() {
        card.toggle_debug();
        tracing::debug!(visible = card.debug_visible(), "toggled motion readout");
    }
    Task::none()
}

/// Stops sampling before the window goes away.
pub fn handle_close_requested<Message>(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.sampler.deactivate();
    iced::exit()
}

pub fn handle_notification<Message>(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}
