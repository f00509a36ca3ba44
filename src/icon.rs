// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized from the embedded branding SVG.

use crate::media::assets::{pixmap_to_rgba, rasterize_svg};
use iced::window::{icon, Icon};

const ICON_SIZE: u32 = 128;

/// Returns `None` if the SVG cannot be rendered.
pub fn load_window_icon() -> Option<Icon> {
    const SVG_SOURCE: &str = include_str!("../assets/branding/parallax_card.svg");

    let pixmap = match rasterize_svg(SVG_SOURCE.as_bytes(), Some((ICON_SIZE, ICON_SIZE))) {
        Ok(pixmap) => pixmap,
        Err(err) => {
            tracing::warn!(error = %err, "window icon unavailable");
            return None;
        }
    };
    icon::from_rgba(pixmap_to_rgba(&pixmap), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_renders() {
        assert!(load_window_icon().is_some());
    }
}
