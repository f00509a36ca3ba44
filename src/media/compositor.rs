// SPDX-License-Identifier: MPL-2.0
//! Per-frame composite of the card stack.
//!
//! The composite surface is the card frame plus a margin on every side, so
//! blurred edges and moving layers are never cut. The frame sits centered
//! on the surface; the UI centers the surface over the frame slot.

use super::assets::CardArtwork;
use super::raster::{self, PreparedLayer};
use crate::domain::parallax::{
    CardStack, ClipMode, LayerImage, LayerPlacement, ParallaxLayer, CORNER_RADIUS, FRAME_HEIGHT,
    FRAME_WIDTH,
};
use crate::error::{Error, Result};
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

/// Renders a [`CardStack`] for any placement set.
#[derive(Debug, Clone)]
pub struct Compositor {
    layers: Vec<(ClipMode, PreparedLayer, f32)>,
    pixel_scale: f32,
    margin: f32,
    frame_px: (f32, f32),
    surface: (u32, u32),
}

impl Compositor {
    /// Prepares every layer of `stack` from `artwork`.
    ///
    /// `pixel_scale` is the number of device pixels per logical pixel and
    /// `max_tilt` the largest tilt (radians) the surface must fit.
    pub fn new(
        stack: &CardStack,
        artwork: &CardArtwork,
        pixel_scale: f32,
        max_tilt: f64,
    ) -> Result<Self> {
        if !(pixel_scale.is_finite() && pixel_scale > 0.0) {
            return Err(Error::Image(format!("invalid pixel scale {pixel_scale}")));
        }
        let frame = (scaled(FRAME_WIDTH, pixel_scale), scaled(FRAME_HEIGHT, pixel_scale));

        let mut layers = Vec::with_capacity(stack.layers().len());
        let mut max_padding = 0u32;
        for layer in stack.layers() {
            let source = match layer.image {
                LayerImage::Card => &artwork.card,
            };
            let scaled_layer = ParallaxLayer {
                blur_radius: layer.blur_radius * pixel_scale,
                ..layer.clone()
            };
            let prepared =
                raster::prepare_layer(&scaled_layer, source, frame, CORNER_RADIUS * pixel_scale)?;
            max_padding = max_padding.max(prepared.padding);
            layers.push((layer.clip, prepared, layer.scale));
        }

        let margin = (max_padding as f32 + stack.max_travel(max_tilt) * pixel_scale).ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let surface = (
            frame.0 + (margin as u32) * 2,
            frame.1 + (margin as u32) * 2,
        );
        tracing::debug!(
            width = surface.0,
            height = surface.1,
            layers = layers.len(),
            "card compositor ready"
        );

        Ok(Self {
            layers,
            pixel_scale,
            margin,
            frame_px: (frame.0 as f32, frame.1 as f32),
            surface,
        })
    }

    /// Surface size in device pixels.
    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface
    }

    /// Surface size in logical pixels.
    #[must_use]
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.surface.0 as f32 / self.pixel_scale,
            self.surface.1 as f32 / self.pixel_scale,
        )
    }

    /// Margin around the frame, in logical pixels.
    #[must_use]
    pub fn logical_margin(&self) -> f32 {
        self.margin / self.pixel_scale
    }

    /// Draws every layer at its placement, back to front.
    ///
    /// `placements` must be in the same order as the stack's layers; extra
    /// or missing entries are ignored.
    pub fn compose(&self, placements: &[LayerPlacement]) -> Result<Pixmap> {
        let mut surface = Pixmap::new(self.surface.0, self.surface.1)
            .ok_or_else(|| Error::Image("Failed to allocate composite surface".into()))?;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        let center = (
            self.margin + self.frame_px.0 / 2.0,
            self.margin + self.frame_px.1 / 2.0,
        );

        for ((clip, prepared, scale), placement) in self.layers.iter().zip(placements) {
            let net = placement.net();
            let (pw, ph) = (
                prepared.pixmap.width() as f32,
                prepared.pixmap.height() as f32,
            );
            let transform = Transform::from_translate(
                center.0 + net.x * self.pixel_scale,
                center.1 + net.y * self.pixel_scale,
            )
            .pre_scale(*scale, *scale)
            .pre_translate(-pw / 2.0, -ph / 2.0);

            match clip {
                ClipMode::Image => {
                    surface.draw_pixmap(0, 0, prepared.pixmap.as_ref(), &paint, transform, None);
                }
                ClipMode::Frame => {
                    let mask = raster::rounded_mask(
                        self.surface.0,
                        self.surface.1,
                        (
                            self.margin + placement.frame.x * self.pixel_scale,
                            self.margin + placement.frame.y * self.pixel_scale,
                            self.frame_px.0,
                            self.frame_px.1,
                        ),
                        CORNER_RADIUS * self.pixel_scale,
                    )?;
                    surface.draw_pixmap(
                        0,
                        0,
                        prepared.pixmap.as_ref(),
                        &paint,
                        transform,
                        Some(&mask),
                    );
                }
            }
        }
        Ok(surface)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(value: f32, scale: f32) -> u32 {
    (value * scale).round().max(1.0) as u32
}
