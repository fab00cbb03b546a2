//! Diagram rendering to PNG files
//!
//! [`DiagramRenderer`] builds a catalogue scene, serializes it to SVG,
//! rasterizes it and writes `{index}_{name}.png` into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::error::{DiagramError, Result};
use crate::fonts::FontSet;
use crate::raster::{self, is_valid_png};
use crate::types::DiagramKind;

/// Options for rasterization
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Scale factor (1.0 = scene pixels)
    pub scale: f32,
    /// Background color painted under the scene (CSS color string)
    pub background: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

impl RenderOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scale factor
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set background color
    pub fn with_background(mut self, bg: impl Into<String>) -> Self {
        self.background = Some(bg.into());
        self
    }
}

/// A diagram written to disk
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    pub kind: DiagramKind,
    pub path: PathBuf,
    /// Size of the PNG in bytes
    pub bytes: usize,
    /// Rendered without the configured fonts
    pub degraded: bool,
}

/// Renders catalogue diagrams into one output directory
#[derive(Debug, Clone)]
pub struct DiagramRenderer {
    output_dir: PathBuf,
    fonts: FontSet,
    options: RenderOptions,
}

impl DiagramRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, fonts: FontSet) -> Self {
        Self {
            output_dir: output_dir.into(),
            fonts,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// SVG source of a diagram
    pub fn render_svg(&self, kind: DiagramKind) -> String {
        catalog::scene(kind).to_svg(self.fonts.family())
    }

    /// PNG bytes of a diagram, without touching the filesystem
    pub fn render_png(&self, kind: DiagramKind) -> Result<Vec<u8>> {
        let png = raster::svg_to_png(&self.render_svg(kind), &self.fonts, &self.options)?;
        if !is_valid_png(&png) {
            return Err(DiagramError::Encode(format!(
                "{} produced no PNG data",
                kind.file_name()
            )));
        }
        Ok(png)
    }

    /// Render one diagram and write it to the output directory
    pub fn render(&self, kind: DiagramKind) -> Result<RenderedDiagram> {
        let png = self.render_png(kind)?;

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(kind.file_name());
        fs::write(&path, &png).map_err(|source| DiagramError::Write {
            path: path.clone(),
            source,
        })?;

        let degraded = self.fonts.is_degraded();
        if degraded {
            log::warn!("{} rendered with fallback fonts", path.display());
        } else {
            log::info!("Rendered {} ({} bytes)", path.display(), png.len());
        }

        Ok(RenderedDiagram {
            kind,
            path,
            bytes: png.len(),
            degraded,
        })
    }

    /// Render all fifteen diagrams in report order
    pub fn render_all(&self) -> Result<Vec<RenderedDiagram>> {
        DiagramKind::all()
            .iter()
            .map(|kind| self.render(*kind))
            .collect()
    }
}
