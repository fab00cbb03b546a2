//! # habitdoc-diagrams
//!
//! Renders the fifteen fixed report diagrams as PNG images.
//!
//! Each diagram is a [`Scene`] of shapes at literal pixel coordinates. A
//! scene is serialized to SVG with the `svg` crate and rasterized with
//! `resvg`, using a configured font pair or, when those files are missing,
//! the system fonts (the result is then flagged as degraded).
//!
//! ## Example
//!
//! ```no_run
//! use habitdoc_diagrams::{DiagramKind, DiagramRenderer, FontSet};
//! use std::path::Path;
//!
//! let fonts = FontSet::load(
//!     Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
//!     Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
//! );
//! let renderer = DiagramRenderer::new("diagrams", fonts);
//!
//! let one = renderer.render(DiagramKind::ErDiagram)?;
//! assert!(one.path.ends_with("3_er_diagram.png"));
//!
//! let all = renderer.render_all()?;
//! assert_eq!(all.len(), 15);
//! # Ok::<(), habitdoc_diagrams::DiagramError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod fonts;
pub mod palette;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod types;

pub use error::{DiagramError, Result};
pub use fonts::{FontSet, FontStatus};
pub use raster::{is_valid_png, svg_to_png};
pub use renderer::{DiagramRenderer, RenderOptions, RenderedDiagram};
pub use scene::{Anchor, Scene, Shape, TextStyle};
pub use types::DiagramKind;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
