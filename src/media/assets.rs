// SPDX-License-Identifier: MPL-2.0
//! Card artwork loading.
//!
//! The bundled card and avatar artwork are SVGs embedded in the binary and
//! rasterized with resvg. Users can point the config or CLI at their own
//! PNG, JPEG or SVG files; a file that fails to load falls back to the
//! bundled artwork with a warning.

use crate::error::{Error, Result};
use resvg::usvg;
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;
use tiny_skia::{ColorU8, IntSize, Pixmap, Transform};

#[derive(RustEmbed)]
#[folder = "assets/card/"]
struct CardAssets;

/// Raster size used for the bundled card art.
const CARD_RASTER_SIZE: (u32, u32) = (530, 942);
/// Raster size used for the bundled avatar.
const AVATAR_RASTER_SIZE: (u32, u32) = (160, 160);

/// Decoded card and avatar images, premultiplied RGBA.
#[derive(Debug, Clone)]
pub struct CardArtwork {
    pub card: Pixmap,
    pub avatar: Pixmap,
}

impl CardArtwork {
    /// Loads the artwork, preferring the given files over the bundled art.
    ///
    /// Returns the artwork and the i18n keys of any warnings to surface.
    pub fn load(card_path: Option<&Path>, avatar_path: Option<&Path>) -> Result<(Self, Vec<String>)> {
        let mut warnings = Vec::new();
        let card = load_or_bundled(card_path, "card.svg", CARD_RASTER_SIZE, &mut warnings)?;
        let avatar = load_or_bundled(avatar_path, "avatar.svg", AVATAR_RASTER_SIZE, &mut warnings)?;
        Ok((Self { card, avatar }, warnings))
    }

    /// Bundled artwork only.
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            card: bundled("card.svg", CARD_RASTER_SIZE)?,
            avatar: bundled("avatar.svg", AVATAR_RASTER_SIZE)?,
        })
    }
}

/// The link glyph shown on the copy button, rasterized at `size` pixels.
pub fn link_icon(size: u32) -> Result<Pixmap> {
    bundled("link.svg", (size, size))
}

fn load_or_bundled(
    path: Option<&Path>,
    bundled_name: &str,
    size: (u32, u32),
    warnings: &mut Vec<String>,
) -> Result<Pixmap> {
    if let Some(path) = path {
        match load_pixmap(path) {
            Ok(pixmap) => return Ok(pixmap),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using bundled artwork instead");
                warnings.push("notification-artwork-load-error".to_string());
            }
        }
    }
    bundled(bundled_name, size)
}

fn bundled(name: &str, (width, height): (u32, u32)) -> Result<Pixmap> {
    let file = CardAssets::get(name)
        .ok_or_else(|| Error::Image(format!("missing bundled asset {name}")))?;
    rasterize_svg(file.data.as_ref(), Some((width, height)))
}

/// Loads a raster or SVG image from disk.
///
/// SVGs are rasterized at their intrinsic size.
pub fn load_pixmap(path: &Path) -> Result<Pixmap> {
    let bytes = fs::read(path)?;
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        rasterize_svg(&bytes, None)
    } else {
        let image = image_rs::load_from_memory(&bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        pixmap_from_rgba(width, height, image.as_raw())
    }
}

/// Renders SVG data, stretched to `size` if given.
pub fn rasterize_svg(data: &[u8], size: Option<(u32, u32)>) -> Result<Pixmap> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
    let intrinsic = tree.size().to_int_size();
    let (width, height) = size.unwrap_or((intrinsic.width(), intrinsic.height()));
    if width == 0 || height == 0 {
        return Err(Error::Image("SVG has empty dimensions".into()));
    }

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Image("Failed to allocate SVG pixmap".into()))?;
    let transform = Transform::from_scale(
        width as f32 / tree.size().width(),
        height as f32 / tree.size().height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Builds a premultiplied pixmap from straight-alpha RGBA bytes.
pub fn pixmap_from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Pixmap> {
    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| Error::Image(format!("invalid image size {width}x{height}")))?;
    if rgba.len() != (width as usize) * (height as usize) * 4 {
        return Err(Error::Image("pixel buffer does not match size".into()));
    }
    let mut data = Vec::with_capacity(rgba.len());
    for px in rgba.chunks_exact(4) {
        let premultiplied = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
        data.extend_from_slice(&[
            premultiplied.red(),
            premultiplied.green(),
            premultiplied.blue(),
            premultiplied.alpha(),
        ]);
    }
    Pixmap::from_vec(data, size).ok_or_else(|| Error::Image("Failed to build pixmap".into()))
}

/// Straight-alpha RGBA bytes, as expected by image handles.
#[must_use]
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let color = px.demultiply();
        out.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    out
}
