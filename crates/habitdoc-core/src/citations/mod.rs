//! Citation annotation
//!
//! Scans report paragraphs for technology and architecture-pattern names,
//! appends bracketed reference markers such as `[1]` or `[2, 4]`, and
//! appends the numbered reference list at the end of the document.
//!
//! The lookup tables are immutable values built once at startup, either
//! from the built-in Habit Tracker tables or from `habitdoc.toml`, and
//! passed explicitly to every operation.

mod annotate;
mod bibliography;
pub mod builtin;
mod references;
mod select;

use thiserror::Error;

pub use annotate::annotate;
pub use bibliography::{
    append_bibliography, format_entries, has_bibliography, is_bibliography_heading,
    BIBLIOGRAPHY_HEADING,
};
pub use references::{CitationMap, ReferenceEntry, ReferenceTable};
pub use select::{
    annotate_document, is_candidate, select_paragraphs, AnnotationReport, Candidate,
};

/// Paragraphs shorter than this (in characters, after trimming) are skipped
pub const DEFAULT_MIN_PARAGRAPH_LEN: usize = 50;

/// Errors raised while building citation tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CiteError {
    #[error("unknown reference topic '{0}'")]
    UnknownTopic(String),

    #[error("phrase '{phrase}' cites unknown reference topic '{topic}'")]
    UnknownPhraseTopic { phrase: String, topic: String },

    #[error("reference id {id} is used by both '{first}' and '{second}'")]
    DuplicateId {
        id: u32,
        first: String,
        second: String,
    },

    #[error("reference topic '{0}' is defined twice")]
    DuplicateTopic(String),

    #[error("a citation rule must name at least one reference topic")]
    EmptyRule,

    #[error("a citation rule has an empty phrase")]
    EmptyPhrase,
}

/// Everything the annotator needs: references, both phrase maps and the
/// paragraph length threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationConfig {
    pub references: ReferenceTable,
    pub technologies: CitationMap,
    pub patterns: CitationMap,
    pub min_paragraph_len: usize,
}

impl CitationConfig {
    /// The Habit Tracker reference list and phrase rules
    pub fn builtin() -> Result<Self, CiteError> {
        let references = builtin_references()?;
        let technologies =
            CitationMap::from_rules(&references, builtin::TECHNOLOGY_RULES.iter().copied())?;
        let patterns =
            CitationMap::from_rules(&references, builtin::PATTERN_RULES.iter().copied())?;
        Ok(Self {
            references,
            technologies,
            patterns,
            min_paragraph_len: DEFAULT_MIN_PARAGRAPH_LEN,
        })
    }
}

/// The built-in reference table
pub fn builtin_references() -> Result<ReferenceTable, CiteError> {
    ReferenceTable::new(
        builtin::REFERENCES
            .iter()
            .map(|(topic, id, text)| (*topic, ReferenceEntry::new(*id, *text))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_builds() {
        let config = CitationConfig::builtin().unwrap();
        assert_eq!(config.references.len(), 20);
        assert_eq!(config.technologies.entries().len(), 15);
        assert_eq!(config.patterns.entries().len(), 6);
        assert_eq!(config.min_paragraph_len, 50);
    }

    #[test]
    fn test_builtin_markers() {
        let config = CitationConfig::builtin().unwrap();
        let marker_of = |map: &CitationMap, phrase: &str| {
            map.entries()
                .iter()
                .find(|(p, _)| p == phrase)
                .map(|(_, m)| m.clone())
        };
        assert_eq!(
            marker_of(&config.technologies, "Spring Security з JWT").as_deref(),
            Some("[2, 4]")
        );
        assert_eq!(
            marker_of(&config.technologies, "RESTful API").as_deref(),
            Some("[15]")
        );
        assert_eq!(
            marker_of(&config.patterns, "Багатошарова архітектура").as_deref(),
            Some("[16]")
        );
    }
}
