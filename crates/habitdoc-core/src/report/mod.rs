//! Report assembler
//!
//! Builds the coursework document from the embedded content parts.
//! `generate` starts a new document; `expand` appends a part to an
//! existing one.

mod builder;
mod content;

use habitdoc_ooxml::{Document, OoxmlError};
use thiserror::Error;
use tracing::info;

use crate::typography::Typography;

pub use builder::{is_requirement_heading, toc_line, ReportBuilder};
pub use content::{ContentBlock, ReportPart, Section, StyledRun, TocEntry};

/// Errors raised while assembling the report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("embedded content {part} is malformed: {source}")]
    Content {
        part: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Document(#[from] OoxmlError),
}

/// Create a new document holding the title page, front matter and chapter 1
pub fn generate(typography: &Typography) -> Result<Document, ReportError> {
    let mut doc = Document::new(&typography.font, typography.size)?;
    expand(&mut doc, ReportPart::Coursework, typography)?;
    Ok(doc)
}

/// Append one content part to the end of `doc`; returns the number of
/// blocks appended
pub fn expand(
    doc: &mut Document,
    part: ReportPart,
    typography: &Typography,
) -> Result<usize, ReportError> {
    let section = part.load()?;
    let count = ReportBuilder::new(doc, typography).render(&section);
    info!("Appended {} blocks: {}", count, section.title);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_contains_front_matter() {
        let doc = generate(&Typography::default()).unwrap();

        for heading in ["ЗМІСТ", "АНОТАЦІЯ", "ABSTRACT", "ВСТУП", "1.2.2 Streaks"] {
            assert!(doc.has_paragraph(heading), "missing {heading}");
        }
        assert!(doc.has_paragraph("Одеса – 2024"));
    }

    #[test]
    fn test_generate_task_list_is_numbered() {
        let doc = generate(&Typography::default()).unwrap();
        let tasks: Vec<_> = doc
            .paragraphs()
            .filter(|p| p.xml().contains(r#"<w:ind w:left="720"/>"#))
            .map(|p| p.text().to_string())
            .collect();

        assert_eq!(tasks.len(), 10);
        assert!(tasks[0].starts_with("1. Проаналізувати"));
        assert!(tasks[9].starts_with("10. Розгорнути"));
    }

    #[test]
    fn test_expand_requirements_bolds_group_headers() {
        let mut doc = Document::new("Times New Roman", 14.0).unwrap();
        let typography = Typography::default();
        expand(&mut doc, ReportPart::Requirements, &typography).unwrap();

        let header = doc
            .paragraphs()
            .find(|p| p.text() == "NFR1. Продуктивність:")
            .unwrap();
        assert!(header.xml().contains("<w:b/>"));

        let item = doc
            .paragraphs()
            .find(|p| p.text().starts_with("NFR1.1."))
            .unwrap();
        assert!(!item.xml().contains("<w:b/>"));
        assert!(doc.has_paragraph("3.6 Представлення даних ІС"));
    }

    #[test]
    fn test_expand_code_appends_listings() {
        let mut doc = Document::new("Times New Roman", 14.0).unwrap();
        let before = doc.paragraph_count();
        let count = expand(&mut doc, ReportPart::CodeListings, &Typography::default()).unwrap();

        assert!(count > 0);
        assert!(doc.paragraph_count() > before);
        let listing = doc
            .paragraphs()
            .find(|p| p.text().starts_with("package com.example.cwweb.users;"))
            .unwrap();
        assert!(listing.xml().contains(r#"w:fill="F5F5F5""#));
    }

    #[test]
    fn test_chapter_four_is_appended_once() {
        let typography = Typography::default();
        let mut doc = Document::new("Times New Roman", 14.0).unwrap();
        expand(&mut doc, ReportPart::Requirements, &typography).unwrap();

        let last = doc.paragraphs().last().unwrap().text().to_string();
        assert!(last.starts_with("- joinedAt"), "{last}");

        expand(&mut doc, ReportPart::CodeListings, &typography).unwrap();
        let chapter_four = doc
            .paragraphs()
            .filter(|p| p.text() == "РОЗДІЛ 4. РЕАЛІЗАЦІЯ ІНФОРМАЦІЙНОЇ СИСТЕМИ")
            .count();
        assert_eq!(chapter_four, 1);

        let tree = doc
            .paragraphs()
            .find(|p| p.text().starts_with("src/main/java/com/example/cwweb/"))
            .unwrap();
        assert!(tree.text().contains("GoalController.java"));
    }
}
