// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions.
//!
//! Timers only exist while they have work to do: motion polling while the
//! sampler is active, animation frames while the spring is moving, and the
//! notification tick while toasts are showing.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval between spring animation steps.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);
/// Interval between notification expiry checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes native window, pointer and keyboard events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowOpened {
            id: window_id,
            size,
        }),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(ref c),
            modifiers,
            ..
        }) if status == event::Status::Ignored
            && modifiers.is_empty()
            && c.as_str().eq_ignore_ascii_case("d") =>
        {
            Some(Message::ToggleDebug)
        }
        _ => None,
    })
}

/// Polls the motion source at `interval` while sampling is active.
pub fn create_motion_subscription(active: bool, interval: Duration) -> Subscription<Message> {
    if active {
        time::every(interval).map(Message::MotionTick)
    } else {
        Subscription::none()
    }
}

/// Drives the spring while it still has motion to show.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}

/// Ticks toast auto-dismiss timers.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
