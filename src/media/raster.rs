// SPDX-License-Identifier: MPL-2.0
//! One-time raster preparation of card layers.
//!
//! Everything that does not depend on the tilt (stretching to the frame,
//! masking, blur, saturation) happens here, once, so per-frame compositing
//! only has to translate and scale finished pixmaps.

use crate::domain::parallax::{ClipMode, ParallaxLayer};
use crate::error::{Error, Result};
use image_rs::{imageops, RgbaImage};
use tiny_skia::{
    FillRule, FilterQuality, IntSize, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect,
    Stroke, Transform,
};

/// Bezier handle ratio approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// A layer image ready for compositing.
///
/// The pixmap is the frame-sized image with `padding` extra pixels on every
/// side (room for blur spread). Its center is the frame center.
#[derive(Debug, Clone)]
pub struct PreparedLayer {
    pub pixmap: Pixmap,
    pub padding: u32,
}

/// Builds a rounded rectangle path.
///
/// The radius is clamped to half the shorter side. Returns `None` for
/// degenerate rectangles.
#[must_use]
pub fn rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Option<Path> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let r = radius.clamp(0.0, width.min(height) / 2.0);
    if r == 0.0 {
        return Rect::from_xywh(x, y, width, height).map(PathBuilder::from_rect);
    }
    let k = r * KAPPA;
    let (right, bottom) = (x + width, y + height);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Builds a surface-sized mask covering a rounded rectangle.
pub fn rounded_mask(
    surface_width: u32,
    surface_height: u32,
    rect: (f32, f32, f32, f32),
    radius: f32,
) -> Result<Mask> {
    let mut mask = Mask::new(surface_width, surface_height)
        .ok_or_else(|| Error::Image("Failed to allocate mask".into()))?;
    if let Some(path) = rounded_rect(rect.0, rect.1, rect.2, rect.3, radius) {
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    }
    Ok(mask)
}

/// Stretches `source` to exactly `width`×`height`.
pub fn stretch(source: &Pixmap, width: u32, height: u32) -> Result<Pixmap> {
    let mut out =
        Pixmap::new(width, height).ok_or_else(|| Error::Image("Failed to allocate layer".into()))?;
    let transform = Transform::from_scale(
        width as f32 / source.width() as f32,
        height as f32 / source.height() as f32,
    );
    let paint = PixmapPaint {
        quality: FilterQuality::Bicubic,
        ..PixmapPaint::default()
    };
    out.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    Ok(out)
}

/// Gaussian sigma used for a visual blur radius.
#[must_use]
pub fn blur_sigma(blur_radius: f32) -> f32 {
    blur_radius / 2.0
}

/// Padding needed around a layer so its blur is not cut off.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blur_padding(blur_radius: f32) -> u32 {
    if blur_radius <= 0.0 {
        0
    } else {
        (blur_sigma(blur_radius) * 3.0).ceil() as u32
    }
}

/// Applies a Gaussian blur to a premultiplied pixmap.
///
/// Blurring premultiplied data keeps edges free of dark fringes.
pub fn blur(pixmap: &Pixmap, blur_radius: f32) -> Result<Pixmap> {
    if blur_radius <= 0.0 {
        return Ok(pixmap.clone());
    }
    let image = RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
        .ok_or_else(|| Error::Image("pixel buffer does not match size".into()))?;
    let mut blurred = imageops::fast_blur(&image, blur_sigma(blur_radius)).into_raw();
    clamp_premultiplied(&mut blurred);

    let size = IntSize::from_wh(pixmap.width(), pixmap.height())
        .ok_or_else(|| Error::Image("invalid layer size".into()))?;
    Pixmap::from_vec(blurred, size).ok_or_else(|| Error::Image("Failed to build pixmap".into()))
}

/// Scales color saturation in place. 1.0 is a no-op, 0.0 is grayscale.
pub fn saturate(pixmap: &mut Pixmap, factor: f32) {
    if (factor - 1.0).abs() < f32::EPSILON {
        return;
    }
    let data = pixmap.data_mut();
    for px in data.chunks_exact_mut(4) {
        let (r, g, b) = (f32::from(px[0]), f32::from(px[1]), f32::from(px[2]));
        let luma = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        let alpha = f32::from(px[3]);
        for (channel, value) in px.iter_mut().take(3).zip([r, g, b]) {
            let adjusted = luma + (value - luma) * factor;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                *channel = adjusted.round().clamp(0.0, alpha) as u8;
            }
        }
    }
}

/// Keeps every color channel at or below its alpha.
fn clamp_premultiplied(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let alpha = px[3];
        for channel in px.iter_mut().take(3) {
            *channel = (*channel).min(alpha);
        }
    }
}

/// Renders the static part of `layer` from `source`.
///
/// `frame` is the card frame size in pixels and `corner_radius` the mask
/// radius. [`ClipMode::Image`] layers are masked here; [`ClipMode::Frame`]
/// layers are masked at composite time.
pub fn prepare_layer(
    layer: &ParallaxLayer,
    source: &Pixmap,
    frame: (u32, u32),
    corner_radius: f32,
) -> Result<PreparedLayer> {
    let (width, height) = frame;
    let mut stretched = stretch(source, width, height)?;

    if layer.clip == ClipMode::Image {
        let mask = rounded_mask(
            width,
            height,
            (0.0, 0.0, width as f32, height as f32),
            corner_radius,
        )?;
        stretched.apply_mask(&mask);
    }

    let padding = blur_padding(layer.blur_radius);
    let mut padded = Pixmap::new(width + padding * 2, height + padding * 2)
        .ok_or_else(|| Error::Image("Failed to allocate layer".into()))?;
    #[allow(clippy::cast_possible_wrap)]
    padded.draw_pixmap(
        padding as i32,
        padding as i32,
        stretched.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    let mut pixmap = blur(&padded, layer.blur_radius)?;
    saturate(&mut pixmap, layer.saturation);
    Ok(PreparedLayer { pixmap, padding })
}

/// Renders the avatar as a circle with a thin white ring.
pub fn prepare_avatar(source: &Pixmap, diameter: u32, ring_width: f32) -> Result<Pixmap> {
    let mut avatar = stretch(source, diameter, diameter)?;
    let d = diameter as f32;
    let circle = PathBuilder::from_circle(d / 2.0, d / 2.0, d / 2.0)
        .ok_or_else(|| Error::Image("invalid avatar size".into()))?;

    let mut mask = Mask::new(diameter, diameter)
        .ok_or_else(|| Error::Image("Failed to allocate mask".into()))?;
    mask.fill_path(&circle, FillRule::Winding, true, Transform::identity());
    avatar.apply_mask(&mask);

    if ring_width > 0.0 {
        if let Some(ring) =
            PathBuilder::from_circle(d / 2.0, d / 2.0, (d - ring_width) / 2.0)
        {
            let mut paint = Paint::default();
            paint.set_color_rgba8(255, 255, 255, 255);
            paint.anti_alias = true;
            let stroke = Stroke {
                width: ring_width,
                ..Stroke::default()
            };
            avatar.stroke_path(&ring, &paint, &stroke, Transform::identity(), None);
        }
    }
    Ok(avatar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parallax::{LayerImage, Offset, ParallaxMotion};
    use tiny_skia::Color;

    fn solid(width: u32, height: u32, color: Color) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).expect("pixmap");
        pixmap.fill(color);
        pixmap
    }

    fn layer(blur_radius: f32, saturation: f32, clip: ClipMode) -> ParallaxLayer {
        ParallaxLayer {
            image: LayerImage::Card,
            blur_radius,
            scale: 1.0,
            base_offset: Offset::ZERO,
            saturation,
            clip,
            content_motion: None,
            frame_motion: ParallaxMotion::direct(1.0),
        }
    }

    fn alpha_at(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
        pixmap.pixel(x, y).expect("in bounds").alpha()
    }

    #[test]
    fn rounded_rect_rejects_empty_size() {
        assert!(rounded_rect(0.0, 0.0, 0.0, 10.0, 4.0).is_none());
        assert!(rounded_rect(0.0, 0.0, 10.0, 10.0, 0.0).is_some());
    }

    #[test]
    fn image_clip_clears_corners_and_keeps_center() {
        let source = solid(8, 8, Color::from_rgba8(255, 0, 0, 255));
        let prepared =
            prepare_layer(&layer(0.0, 1.0, ClipMode::Image), &source, (60, 60), 20.0)
                .expect("prepared");
        assert_eq!(prepared.padding, 0);
        assert_eq!(alpha_at(&prepared.pixmap, 0, 0), 0);
        assert_eq!(alpha_at(&prepared.pixmap, 30, 30), 255);
    }

    #[test]
    fn frame_clip_layers_keep_square_corners() {
        let source = solid(8, 8, Color::from_rgba8(0, 0, 255, 255));
        let prepared =
            prepare_layer(&layer(0.0, 1.0, ClipMode::Frame), &source, (60, 60), 20.0)
                .expect("prepared");
        assert_eq!(alpha_at(&prepared.pixmap, 0, 0), 255);
    }

    #[test]
    fn blur_pads_and_spreads_past_the_frame() {
        let source = solid(8, 8, Color::from_rgba8(255, 255, 255, 255));
        let prepared =
            prepare_layer(&layer(16.0, 1.0, ClipMode::Image), &source, (40, 40), 4.0)
                .expect("prepared");
        assert_eq!(prepared.padding, 24);
        assert_eq!(prepared.pixmap.width(), 40 + 48);
        // Just outside the frame edge, the blur has bled some coverage.
        assert!(alpha_at(&prepared.pixmap, 22, 44) > 0);
    }

    #[test]
    fn blurred_pixels_stay_premultiplied() {
        let source = solid(8, 8, Color::from_rgba8(200, 120, 40, 255));
        let prepared =
            prepare_layer(&layer(10.0, 1.0, ClipMode::Image), &source, (30, 30), 6.0)
                .expect("prepared");
        for px in prepared.pixmap.pixels() {
            assert!(px.red() <= px.alpha());
            assert!(px.green() <= px.alpha());
            assert!(px.blue() <= px.alpha());
        }
    }

    #[test]
    fn zero_saturation_is_grayscale() {
        let mut pixmap = solid(2, 2, Color::from_rgba8(255, 0, 0, 255));
        saturate(&mut pixmap, 0.0);
        let px = pixmap.pixel(0, 0).expect("pixel");
        assert_eq!(px.red(), px.green());
        assert_eq!(px.green(), px.blue());
    }

    #[test]
    fn saturation_boost_pushes_channels_apart() {
        let mut pixmap = solid(1, 1, Color::from_rgba8(150, 100, 100, 255));
        saturate(&mut pixmap, 2.0);
        let px = pixmap.pixel(0, 0).expect("pixel");
        assert!(px.red() > 150);
        assert!(px.green() < 100);
    }

    #[test]
    fn avatar_is_circular() {
        let source = solid(4, 4, Color::from_rgba8(0, 255, 0, 255));
        let avatar = prepare_avatar(&source, 40, 1.0).expect("avatar");
        assert_eq!(alpha_at(&avatar, 0, 0), 0);
        assert_eq!(alpha_at(&avatar, 20, 20), 255);
    }
}
