// SPDX-License-Identifier: MPL-2.0
//! Static parallax layer description and its per-sample placement.

use super::transform::{Offset, ParallaxMotion};
use crate::domain::motion::AttitudeSample;

/// Which artwork a layer draws. The avatar is not a parallax layer; it sits
/// in the fixed overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerImage {
    Card,
}

/// Where the rounded-rectangle mask sits relative to the layer's effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    /// The image is masked first; blur, scale and offsets act on the masked
    /// result, so the mask travels with the image.
    Image,
    /// The mask is the unscaled card frame. Scale and `content_motion` move
    /// the image inside it, `frame_motion` moves the mask itself.
    Frame,
}

/// One layer of the card stack.
///
/// Layers are defined once when the card is built and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    pub image: LayerImage,
    /// Visual blur radius in logical pixels; the Gaussian sigma is half of
    /// it. Zero disables blur.
    pub blur_radius: f32,
    /// Uniform scale around the layer center.
    pub scale: f32,
    /// Static displacement applied before any motion.
    pub base_offset: Offset,
    /// Saturation multiplier; 1.0 leaves colors untouched.
    pub saturation: f32,
    pub clip: ClipMode,
    /// Motion applied to the image inside a [`ClipMode::Frame`] mask.
    pub content_motion: Option<ParallaxMotion>,
    /// Motion applied to the whole (masked) layer.
    pub frame_motion: ParallaxMotion,
}

/// Where a layer is drawn for one attitude sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerPlacement {
    /// Displacement of the masked frame: base offset plus frame motion.
    pub frame: Offset,
    /// Displacement of the image inside the mask.
    pub content: Offset,
}

impl LayerPlacement {
    /// Total on-screen displacement of the image content.
    #[must_use]
    pub fn net(&self) -> Offset {
        self.frame + self.content
    }
}

impl ParallaxLayer {
    /// Computes this layer's placement for `sample`.
    #[must_use]
    pub fn placement(&self, sample: &AttitudeSample) -> LayerPlacement {
        let content = self
            .content_motion
            .map_or(Offset::ZERO, |motion| motion.offset(sample));
        LayerPlacement {
            frame: self.base_offset + self.frame_motion.offset(sample),
            content,
        }
    }

    /// Placement with no tilt applied.
    #[must_use]
    pub fn rest_placement(&self) -> LayerPlacement {
        self.placement(&AttitudeSample::NEUTRAL)
    }
}
