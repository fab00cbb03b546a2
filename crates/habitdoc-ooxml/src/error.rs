//! Error types for OOXML operations

use thiserror::Error;

/// Errors that can occur while reading, editing or saving a DOCX package
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Part content is not valid UTF-8
    #[error("Invalid UTF-8 in {part}: {source}")]
    Utf8 {
        part: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Required file not found in archive
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// Invalid document structure
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
