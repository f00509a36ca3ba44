// SPDX-License-Identifier: MPL-2.0
//! Pill button styles.
//!
//! The call-to-action buttons are drawn without a press handler, so Iced
//! reports them as disabled; every status maps to the same look.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// White pill with dark label ("Copy my link").
pub fn pill_solid(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: palette::INK_900,
        border: Border {
            color: palette::WHITE,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Outlined pill on the screen background ("Share this preview").
pub fn pill_outlined(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::NIGHT_900)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::WHITE,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless icon button used to dismiss toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::SLATE_300
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
