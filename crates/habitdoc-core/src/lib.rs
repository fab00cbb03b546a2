//! habitdoc-core - coursework report assembly and citations
//!
//! Builds the Habit Tracker coursework report as a DOCX document, annotates
//! its paragraphs with bibliographic reference markers and appends the
//! numbered reference list.
//!
//! # Example
//!
//! ```
//! use habitdoc_core::citations::{annotate, CitationMap};
//!
//! let map = CitationMap::from_pairs([("Spring Boot 3.2.0", "[1]"), ("MongoDB", "[5]")]);
//! let text = "Бекенд використовує Spring Boot 3.2.0 та MongoDB для зберігання даних.";
//!
//! assert_eq!(
//!     annotate(text, &map),
//!     "Бекенд використовує Spring Boot 3.2.0 [1] та MongoDB [5] для зберігання даних."
//! );
//! ```

pub mod citations;
pub mod config;
pub mod report;
pub mod typography;

// Re-export main types and functions
pub use citations::{annotate, annotate_document, append_bibliography, CitationConfig, CiteError};
pub use config::{Settings, SettingsError};
pub use report::{expand, generate, ReportError, ReportPart};
pub use typography::Typography;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
