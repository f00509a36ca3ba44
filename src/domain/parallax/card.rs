// SPDX-License-Identifier: MPL-2.0
//! The three-layer card stack and its geometry.

use super::layer::{ClipMode, LayerImage, LayerPlacement, ParallaxLayer};
use super::transform::{Offset, ParallaxMotion};
use crate::domain::motion::AttitudeSample;

/// Card frame width in logical pixels.
pub const FRAME_WIDTH: f32 = 265.0;
/// Card frame height in logical pixels.
pub const FRAME_HEIGHT: f32 = 471.0;
/// Corner radius of every layer mask.
pub const CORNER_RADIUS: f32 = 24.0;

/// Ordered layers, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStack {
    layers: Vec<ParallaxLayer>,
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new(vec![glow_layer(), halo_layer(), hero_layer()])
    }
}

impl CardStack {
    #[must_use]
    pub fn new(layers: Vec<ParallaxLayer>) -> Self {
        Self { layers }
    }

    #[must_use]
    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// Placements for every layer, in z-order.
    #[must_use]
    pub fn placements(&self, sample: &AttitudeSample) -> Vec<LayerPlacement> {
        self.layers
            .iter()
            .map(|layer| layer.placement(sample))
            .collect()
    }

    /// Largest distance any layer can travel from its rest position for a
    /// tilt bounded by `max_tilt` radians on both axes.
    ///
    /// Used to size the composite surface so moving layers never get cut.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn max_travel(&self, max_tilt: f64) -> f32 {
        self.layers
            .iter()
            .map(|layer| {
                let content = layer.content_motion.map_or(0.0, |m| m.magnitude);
                let base = layer.base_offset.x.abs().max(layer.base_offset.y.abs());
                base + ((layer.frame_motion.magnitude + content) * max_tilt) as f32
            })
            .fold(0.0, f32::max)
    }
}

/// Heavily blurred backdrop that drifts slightly with the tilt.
fn glow_layer() -> ParallaxLayer {
    ParallaxLayer {
        image: LayerImage::Card,
        blur_radius: 40.0,
        scale: 0.9,
        base_offset: Offset::new(0.0, 40.0),
        saturation: 1.0,
        clip: ClipMode::Image,
        content_motion: None,
        frame_motion: ParallaxMotion::direct(10.0),
    }
}

/// Saturated mid-blur layer just behind the card.
fn halo_layer() -> ParallaxLayer {
    ParallaxLayer {
        image: LayerImage::Card,
        blur_radius: 16.0,
        scale: 0.9,
        base_offset: Offset::new(0.0, 12.0),
        saturation: 2.0,
        clip: ClipMode::Image,
        content_motion: None,
        frame_motion: ParallaxMotion::direct(5.0),
    }
}

/// Sharp card face: the image counters the tilt inside a frame that follows it.
fn hero_layer() -> ParallaxLayer {
    ParallaxLayer {
        image: LayerImage::Card,
        blur_radius: 0.0,
        scale: 1.2,
        base_offset: Offset::ZERO,
        saturation: 1.0,
        clip: ClipMode::Frame,
        content_motion: Some(ParallaxMotion::inverse(30.0)),
        frame_motion: ParallaxMotion::direct(50.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stack_has_three_layers_back_to_front() {
        let stack = CardStack::default();
        let blurs: Vec<f32> = stack.layers().iter().map(|l| l.blur_radius).collect();
        assert_eq!(blurs, vec![40.0, 16.0, 0.0]);
    }

    #[test]
    fn neutral_sample_puts_every_layer_at_base() {
        let stack = CardStack::default();
        let placements = stack.placements(&AttitudeSample::NEUTRAL);
        let nets: Vec<Offset> = placements.iter().map(LayerPlacement::net).collect();
        assert!(nets[0].approx_eq(Offset::new(0.0, 40.0), 0.0));
        assert!(nets[1].approx_eq(Offset::new(0.0, 12.0), 0.0));
        assert!(nets[2].approx_eq(Offset::ZERO, 0.0));
    }

    #[test]
    fn layers_move_at_their_own_rates() {
        let stack = CardStack::default();
        let sample = AttitudeSample::new(0.0, 0.1, 0.0);
        let placements = stack.placements(&sample);
        assert!((placements[0].net().x - 1.0).abs() < 1e-5);
        assert!((placements[1].net().x - 0.5).abs() < 1e-5);
        assert!((placements[2].net().x - 2.0).abs() < 1e-5);
        assert!((placements[2].frame.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn max_travel_covers_hero_frame_and_content() {
        let stack = CardStack::default();
        // glow: 40 + 10*0.5, hero: (50+30)*0.5
        assert!((stack.max_travel(0.5) - 45.0).abs() < 1e-4);
        assert!((stack.max_travel(1.0) - 80.0).abs() < 1e-4);
    }
}
