// SPDX-License-Identifier: MPL-2.0
//! A wrapper that occupies a fixed slot in the layout but lets its content
//! spill past the slot on every side.
//!
//! The card composite is larger than the card frame (blur spread and layer
//! travel), yet siblings must be spaced around the frame only. The content
//! is laid out at its own size and centered on the slot.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::{Element, Length, Point, Rectangle, Size};

pub struct Overflow<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    slot: Size,
    content_size: Size,
}

impl<'a, Message, Theme, Renderer> Overflow<'a, Message, Theme, Renderer> {
    /// `content` is laid out at `content_size` and centered on a `slot`-sized
    /// box.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        slot: Size,
        content_size: Size,
    ) -> Self {
        Self {
            content: content.into(),
            slot,
            content_size,
        }
    }
}

/// Top-left corner of `content` when centered on `slot`.
fn centered_origin(slot: Size, content: Size) -> Point {
    Point::new(
        (slot.width - content.width) / 2.0,
        (slot.height - content.height) / 2.0,
    )
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Overflow<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(
            Length::Fixed(self.slot.width),
            Length::Fixed(self.slot.height),
        )
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        _limits: &layout::Limits,
    ) -> layout::Node {
        let content_limits = layout::Limits::new(Size::ZERO, self.content_size);
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits)
            .move_to(centered_origin(self.slot, self.content_size));
        layout::Node::with_children(self.slot, vec![content])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            content_layout,
            cursor,
            viewport,
        );
    }
}

impl<'a, Message, Theme, Renderer> From<Overflow<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Overflow<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper to build an [`Overflow`].
pub fn overflow<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    slot: Size,
    content_size: Size,
) -> Overflow<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Overflow::new(content, slot, content_size)
}
