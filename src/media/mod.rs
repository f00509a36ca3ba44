// SPDX-License-Identifier: MPL-2.0
//! Card raster pipeline: artwork loading, one-time layer preparation and
//! the per-frame composite.

pub mod assets;
pub mod compositor;
pub mod raster;

pub use assets::CardArtwork;
pub use compositor::Compositor;

use iced::widget::image;
use tiny_skia::Pixmap;

/// A rendered raster ready for display, with its logical size.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub handle: image::Handle,
    pub width: f32,
    pub height: f32,
}

impl CardImage {
    /// Wraps a premultiplied pixmap rendered at `pixel_scale` device pixels
    /// per logical pixel.
    #[must_use]
    pub fn from_pixmap(pixmap: &Pixmap, pixel_scale: f32) -> Self {
        let handle = image::Handle::from_rgba(
            pixmap.width(),
            pixmap.height(),
            assets::pixmap_to_rgba(pixmap),
        );
        Self {
            handle,
            width: pixmap.width() as f32 / pixel_scale,
            height: pixmap.height() as f32 / pixel_scale,
        }
    }
}
