// SPDX-License-Identifier: MPL-2.0
//! Top-level view: the card screen with toasts stacked on top.

use super::Message;
use crate::application::MotionSampler;
use crate::i18n::fluent::I18n;
use crate::ui::card_screen::{self, MotionReadout};
use crate::ui::design_tokens::{palette, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use iced::widget::{Container, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sampler: &'a MotionSampler,
    pub card: Option<&'a card_screen::State>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = match ctx.card {
        Some(state) => card_screen::view(card_screen::ViewContext {
            i18n: ctx.i18n,
            state,
            readout: readout(ctx.sampler),
        }),
        None => unavailable(ctx.i18n),
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn readout(sampler: &MotionSampler) -> MotionReadout {
    MotionReadout {
        source: sampler.source_name(),
        state: sampler.state(),
        sample: sampler.current(),
        skipped: sampler.skipped_count(),
    }
}

/// Shown in place of the card when its artwork could not be prepared.
fn unavailable<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("notification-render-error"))
            .size(typography::BODY)
            .color(palette::MIST_100),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::screen)
    .into()
}
