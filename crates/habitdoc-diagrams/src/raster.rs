//! SVG to PNG rasterization with resvg

use crate::error::{DiagramError, Result};
use crate::fonts::FontSet;
use crate::renderer::RenderOptions;

/// PNG file signature
pub const PNG_MAGIC: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// True when `bytes` start with the PNG signature
pub fn is_valid_png(bytes: &[u8]) -> bool {
    bytes.len() > PNG_MAGIC.len() && bytes.starts_with(PNG_MAGIC)
}

/// Convert an SVG string to PNG bytes
pub fn svg_to_png(svg: &str, fonts: &FontSet, options: &RenderOptions) -> Result<Vec<u8>> {
    let tree = {
        let opts = usvg::Options {
            font_family: fonts.family().to_string(),
            fontdb: fonts.database(),
            ..usvg::Options::default()
        };
        usvg::Tree::from_str(svg, &opts)?
    };

    let size = tree.size();
    let scale = options.scale;
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(DiagramError::Pixmap { width, height })?;

    if let Some(ref bg) = options.background {
        match parse_color(bg) {
            Some(color) => pixmap.fill(color),
            None => log::warn!("Ignoring unknown background colour '{}'", bg),
        }
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| DiagramError::Encode(e.to_string()))
}

/// Parse a CSS color string to tiny_skia::Color
pub fn parse_color(color: &str) -> Option<tiny_skia::Color> {
    let color = color.trim().to_lowercase();

    match color.as_str() {
        "white" => return Some(tiny_skia::Color::WHITE),
        "black" => return Some(tiny_skia::Color::BLACK),
        "transparent" => return Some(tiny_skia::Color::TRANSPARENT),
        _ => {}
    }

    let hex = color.strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            // #RGB -> #RRGGBB
            let r = channel(&hex[0..1].repeat(2))?;
            let g = channel(&hex[1..2].repeat(2))?;
            let b = channel(&hex[2..3].repeat(2))?;
            Some(tiny_skia::Color::from_rgba8(r, g, b, 255))
        }
        6 => Some(tiny_skia::Color::from_rgba8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            255,
        )),
        8 => Some(tiny_skia::Color::from_rgba8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}
