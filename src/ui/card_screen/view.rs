// SPDX-License-Identifier: MPL-2.0
//! Card screen layout.

use super::State;
use crate::application::SamplerState;
use crate::domain::motion::AttitudeSample;
use crate::domain::parallax::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::overflow;
use iced::font::{self, Font};
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Size};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Widest the page column gets on large windows.
const PAGE_MAX_WIDTH: f32 = 420.0;

/// Sampler values shown by the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionReadout {
    pub source: &'static str,
    pub state: SamplerState,
    pub sample: AttitudeSample,
    pub skipped: u64,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub readout: MotionReadout,
}

/// Relative line height giving `extra` pixels between lines of `size` text.
fn spaced(size: f32, extra: f32) -> f32 {
    1.2 + extra / size
}

/// Renders the whole screen. The card buttons have no press handler.
pub fn view<'a, Message>(ctx: ViewContext<'a>) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let i18n = ctx.i18n;

    let share_text = Text::new(i18n.tr("share-text"))
        .size(typography::BODY)
        .line_height(spaced(typography::BODY, typography::LINE_SPACING))
        .color(palette::MIST_100)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let link_icon = ctx.state.link_icon();
    let copy_button = button(centered_label(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                image(link_icon.handle.clone())
                    .width(link_icon.width)
                    .height(link_icon.height),
            )
            .push(
                Text::new(i18n.tr("copy-link-button"))
                    .size(typography::BODY)
                    .font(BOLD),
            ),
    ))
    .width(Length::Fill)
    .height(sizing::PILL_HEIGHT)
    .padding([spacing::XS + 2.0, spacing::LG - 4.0])
    .style(styles::button::pill_solid);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(PAGE_MAX_WIDTH)
        .push(share_text)
        .push(copy_button)
        .push(divider(i18n))
        .push(card(&ctx))
        .push(raised(share_preview_button(i18n), sizing::PILL_HEIGHT));

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::screen);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);
    if ctx.state.debug_visible() {
        layers = layers.push(debug_overlay(i18n, ctx.readout));
    }
    layers.into()
}

/// Centers a label inside a full-width pill.
fn centered_label<'a, Message: 'a>(
    label: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Container::new(label)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Draws `content` in a layer above everything laid out before it, so the
/// card glow spilling downward stays underneath.
fn raised<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    height: f32,
) -> Element<'a, Message> {
    Stack::new()
        .push(Space::new().width(Length::Fill).height(height))
        .push(content)
        .into()
}

fn divider<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let line = || {
        Container::new(Space::new().width(Length::Fill).height(1.0))
            .width(Length::Fill)
            .height(1.0)
            .style(styles::container::divider)
    };
    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(line())
        .push(
            Container::new(
                Text::new(i18n.tr("divider-or"))
                    .size(typography::BODY)
                    .color(palette::WHITE),
            )
            .width(sizing::DIVIDER_LABEL_WIDTH)
            .align_x(alignment::Horizontal::Center),
        )
        .push(line())
        .into()
}

/// The composited layers with the fixed avatar and text on top.
fn card<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let frame = ctx.state.frame();
    let slot = Size::new(FRAME_WIDTH, FRAME_HEIGHT);
    let layers = overflow(
        image(frame.handle.clone())
            .width(frame.width)
            .height(frame.height),
        slot,
        Size::new(frame.width, frame.height),
    );

    let avatar = ctx.state.avatar();
    let overlay = Column::new()
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([0.0, spacing::MD])
        .push(Space::new().height(sizing::AVATAR_TOP))
        .push(
            image(avatar.handle.clone())
                .width(avatar.width)
                .height(avatar.height),
        )
        .push(
            Container::new(
                Text::new(ctx.i18n.tr("card-title"))
                    .size(typography::TITLE)
                    .font(BOLD)
                    .color(palette::WHITE),
            )
            .padding([spacing::XS, 0.0]),
        )
        .push(
            Text::new(ctx.i18n.tr("card-body"))
                .size(typography::CAPTION)
                .line_height(spaced(typography::CAPTION, typography::LINE_SPACING))
                .color(palette::WHITE)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );

    Stack::new()
        .width(FRAME_WIDTH)
        .height(FRAME_HEIGHT)
        .push(layers)
        .push(overlay)
        .into()
}

fn share_preview_button<'a, Message: Clone + 'a>(i18n: &I18n) -> Element<'a, Message> {
    button(centered_label(
        Text::new(i18n.tr("share-preview-button"))
            .size(typography::BODY)
            .font(BOLD),
    ))
    .width(Length::Fill)
    .height(sizing::PILL_HEIGHT)
    .padding([spacing::XS + 2.0, spacing::LG - 4.0])
    .style(styles::button::pill_outlined)
    .into()
}

fn debug_overlay<'a, Message: 'a>(i18n: &I18n, readout: MotionReadout) -> Element<'a, Message> {
    let angle = |key: &str, value: f64| {
        Text::new(i18n.tr_with_args(key, &[("value", format!("{value:+.3}").as_str())]))
            .size(typography::CAPTION)
            .font(Font::MONOSPACE)
    };
    let state_key = match readout.state {
        SamplerState::Active => "debug-state-active",
        SamplerState::Inactive => "debug-state-inactive",
    };

    let panel = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("debug-title")).size(typography::BODY).font(BOLD))
        .push(
            Text::new(i18n.tr_with_args("debug-source", &[("name", readout.source)]))
                .size(typography::CAPTION),
        )
        .push(Text::new(i18n.tr(state_key)).size(typography::CAPTION))
        .push(angle("debug-pitch", readout.sample.pitch))
        .push(angle("debug-roll", readout.sample.roll))
        .push(angle("debug-yaw", readout.sample.yaw))
        .push(
            Text::new(i18n.tr_with_args(
                "debug-skipped",
                &[("count", readout.skipped.to_string().as_str())],
            ))
            .size(typography::CAPTION),
        )
        .push(
            Text::new(i18n.tr("debug-hint"))
                .size(typography::CAPTION)
                .color(palette::SLATE_300),
        );

    Container::new(
        Container::new(panel)
            .padding(spacing::SM)
            .style(styles::container::debug_panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(alignment::Horizontal::Left)
    .align_y(alignment::Vertical::Top)
    .into()
}
