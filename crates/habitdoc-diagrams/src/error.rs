//! Error types for diagram operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering diagrams
#[derive(Error, Debug)]
pub enum DiagramError {
    /// Name or index that matches no diagram
    #[error("Unknown diagram: {0}")]
    UnknownDiagram(String),

    /// Generated SVG was rejected by the parser
    #[error("SVG parsing failed: {0}")]
    Svg(#[from] usvg::Error),

    /// Zero or oversized target dimensions
    #[error("Failed to create pixmap ({width}x{height})")]
    Pixmap { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Output could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for diagram operations
pub type Result<T> = std::result::Result<T, DiagramError>;
