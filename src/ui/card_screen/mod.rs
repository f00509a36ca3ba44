// SPDX-License-Identifier: MPL-2.0
//! The card screen: composited parallax card plus the static share layout.
//!
//! [`State`] owns the compositor and the last rendered raster. The sampled
//! attitude enters through [`State::set_target`]; the spring follower then
//! decides what is actually drawn on each animation tick.

mod view;

pub use view::{view, MotionReadout, ViewContext};

use crate::domain::motion::AttitudeSample;
use crate::domain::parallax::{CardStack, LayerPlacement};
use crate::error::Result;
use crate::media::{assets, raster, CardArtwork, CardImage, Compositor};
use crate::ui::design_tokens::{border, sizing};
use crate::ui::state::SpringFollower;
use std::time::Duration;

/// Device pixels per logical pixel used for every card raster.
pub const PIXEL_SCALE: f32 = 2.0;

#[derive(Debug)]
pub struct State {
    stack: CardStack,
    compositor: Compositor,
    frame: CardImage,
    avatar: CardImage,
    link_icon: CardImage,
    spring: SpringFollower,
    rendered: AttitudeSample,
    show_debug: bool,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_px(logical: f32) -> u32 {
    (logical * PIXEL_SCALE).round() as u32
}

impl State {
    /// Prepares every raster and draws the card at rest.
    ///
    /// `max_tilt` bounds the tilt the composite surface is sized for.
    pub fn new(
        stack: CardStack,
        artwork: &CardArtwork,
        spring: SpringFollower,
        max_tilt: f64,
    ) -> Result<Self> {
        let compositor = Compositor::new(&stack, artwork, PIXEL_SCALE, max_tilt)?;
        let rest = compositor.compose(&stack.placements(&AttitudeSample::NEUTRAL))?;
        let avatar = raster::prepare_avatar(
            &artwork.avatar,
            device_px(sizing::AVATAR),
            border::WIDTH_SM * PIXEL_SCALE,
        )?;
        let link_icon = assets::link_icon(device_px(sizing::ICON_SM))?;

        Ok(Self {
            frame: CardImage::from_pixmap(&rest, PIXEL_SCALE),
            avatar: CardImage::from_pixmap(&avatar, PIXEL_SCALE),
            link_icon: CardImage::from_pixmap(&link_icon, PIXEL_SCALE),
            stack,
            compositor,
            spring,
            rendered: AttitudeSample::NEUTRAL,
            show_debug: false,
        })
    }

    /// Feeds a new sampled attitude.
    ///
    /// With the spring disabled the card is redrawn right away; otherwise
    /// the next [`animate`](Self::animate) calls ease toward it.
    pub fn set_target(&mut self, sample: AttitudeSample) -> Result<()> {
        self.spring.set_target(sample);
        if self.spring.is_settled() {
            self.render()?;
        }
        Ok(())
    }

    /// Advances the spring and redraws if the displayed tilt moved.
    ///
    /// Returns whether a new frame was composed.
    pub fn animate(&mut self, elapsed: Duration) -> Result<bool> {
        if self.spring.step(elapsed) {
            self.render()
        } else {
            Ok(false)
        }
    }

    fn render(&mut self) -> Result<bool> {
        let attitude = self.spring.current();
        if !attitude.tilt_differs(&self.rendered) {
            self.rendered = attitude;
            return Ok(false);
        }
        let pixmap = self.compositor.compose(&self.stack.placements(&attitude))?;
        self.frame = CardImage::from_pixmap(&pixmap, PIXEL_SCALE);
        self.rendered = attitude;
        Ok(true)
    }

    /// Whether the spring still has motion left to show.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.spring.is_settled()
    }

    /// Attitude of the frame currently on screen.
    #[must_use]
    pub fn displayed(&self) -> AttitudeSample {
        self.rendered
    }

    /// Layer placements of the frame currently on screen.
    #[must_use]
    pub fn placements(&self) -> Vec<LayerPlacement> {
        self.stack.placements(&self.rendered)
    }

    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
    }

    #[must_use]
    pub fn debug_visible(&self) -> bool {
        self.show_debug
    }

    pub(crate) fn frame(&self) -> &CardImage {
        &self.frame
    }

    pub(crate) fn avatar(&self) -> &CardImage {
        &self.avatar
    }

    pub(crate) fn link_icon(&self) -> &CardImage {
        &self.link_icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parallax::Offset;

    fn state(spring: SpringFollower) -> State {
        let artwork = CardArtwork::bundled().expect("bundled artwork");
        State::new(CardStack::default(), &artwork, spring, 0.5).expect("card state")
    }

    #[test]
    fn starts_at_rest_with_rasters_ready() {
        let state = state(SpringFollower::default());
        assert!(state.displayed().is_neutral());
        assert!(!state.is_animating());
        assert!(state.frame().width > crate::domain::parallax::FRAME_WIDTH);
        assert!((state.avatar().width - sizing::AVATAR).abs() < 1e-3);
    }

    #[test]
    fn without_spring_the_target_is_drawn_immediately() {
        let mut state = state(SpringFollower::new(false, 0.15, 0.86));
        state
            .set_target(AttitudeSample::new(0.1, -0.2, 0.0))
            .expect("render");
        assert_eq!(state.displayed(), AttitudeSample::new(0.1, -0.2, 0.0));
        let hero = state.placements()[2];
        assert!(hero.net().approx_eq(Offset::new(-4.0, 2.0), 1e-5));
    }

    #[test]
    fn spring_eases_toward_the_target() {
        let mut state = state(SpringFollower::default());
        let target = AttitudeSample::new(0.2, 0.1, 0.0);
        state.set_target(target).expect("target");
        assert!(state.displayed().is_neutral());
        assert!(state.is_animating());

        assert!(state.animate(Duration::from_millis(16)).expect("frame"));
        let first = state.displayed();
        assert!(first.pitch > 0.0 && first.pitch < 0.2);

        for _ in 0..200 {
            state.animate(Duration::from_millis(16)).expect("frame");
        }
        assert!(!state.is_animating());
        assert_eq!(state.displayed(), target);
    }

    #[test]
    fn settled_state_does_not_recompose() {
        let mut state = state(SpringFollower::default());
        assert!(!state.animate(Duration::from_millis(16)).expect("frame"));
    }

    #[test]
    fn debug_toggle_flips() {
        let mut state = state(SpringFollower::default());
        assert!(!state.debug_visible());
        state.toggle_debug();
        assert!(state.debug_visible());
    }
}
