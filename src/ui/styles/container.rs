// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Full-window background.
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NIGHT_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// One-pixel rule on either side of the "Or" label.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_300)),
        ..Default::default()
    }
}

/// Translucent panel behind the motion readout.
pub fn debug_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast card with a severity-colored outline.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: palette::BLACK,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
