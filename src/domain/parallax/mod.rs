// SPDX-License-Identifier: MPL-2.0
//! Parallax domain: pure transforms from attitude to layer offsets.

pub mod card;
pub mod layer;
pub mod transform;

pub use card::{CardStack, CORNER_RADIUS, FRAME_HEIGHT, FRAME_WIDTH};
pub use layer::{ClipMode, LayerImage, LayerPlacement, ParallaxLayer};
pub use transform::{direct_offset, inverse_offset, Direction, Offset, ParallaxMotion};
