//! Candidate paragraph selection and in-place annotation

use habitdoc_ooxml::Document;
use tracing::{debug, info};

use super::bibliography::is_bibliography_heading;
use super::{annotate, CitationConfig};
use crate::typography::Typography;

/// A paragraph worth annotating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position among the document's body paragraphs
    pub index: usize,
    /// Mentions at least one technology phrase
    pub technologies: bool,
    /// Mentions at least one architecture-pattern phrase
    pub patterns: bool,
}

/// Outcome of [`annotate_document`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Paragraphs that passed the length filter
    pub examined: usize,
    /// Indices of rewritten paragraphs, ascending
    pub rewritten: Vec<usize>,
}

/// True if the trimmed text is non-empty and at least `min_len` characters
pub fn is_candidate(text: &str, min_len: usize) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_len
}

/// Paragraphs long enough to annotate that mention a known phrase
///
/// Headings and other short lines fall under the length threshold, so
/// they are never touched. Nothing from the reference list heading onward
/// is considered; its entries name the very phrases being cited.
pub fn select_paragraphs(doc: &Document, config: &CitationConfig) -> Vec<Candidate> {
    doc.paragraphs()
        .take_while(|p| !is_bibliography_heading(p))
        .enumerate()
        .filter(|(_, p)| is_candidate(p.text(), config.min_paragraph_len))
        .filter_map(|(index, p)| {
            let text = p.text().trim();
            let candidate = Candidate {
                index,
                technologies: config.technologies.matches(text),
                patterns: config.patterns.matches(text),
            };
            (candidate.technologies || candidate.patterns).then_some(candidate)
        })
        .collect()
}

/// Annotate every candidate paragraph in place
///
/// The technology map is applied first and the pattern map is applied to
/// its result, so a paragraph naming both keeps both sets of markers.
/// Changed paragraphs are rewritten as a single body-formatted run; a
/// paragraph whose phrases are all cited already is left untouched.
pub fn annotate_document(
    doc: &mut Document,
    config: &CitationConfig,
    typography: &Typography,
) -> AnnotationReport {
    let candidates = select_paragraphs(doc, config);
    let examined = doc
        .paragraphs()
        .take_while(|p| !is_bibliography_heading(p))
        .filter(|p| is_candidate(p.text(), config.min_paragraph_len))
        .count();

    let mut rewritten = Vec::new();
    let mut candidates = candidates.into_iter().peekable();
    for (index, para) in doc.paragraphs_mut().enumerate() {
        let Some(candidate) = candidates.next_if(|c| c.index == index) else {
            continue;
        };

        let original = para.text().trim().to_string();
        let mut text = original.clone();
        if candidate.technologies {
            text = annotate(&text, &config.technologies);
        }
        if candidate.patterns {
            text = annotate(&text, &config.patterns);
        }

        if text == original {
            debug!("Paragraph {} already cited", index);
            continue;
        }
        para.replace(&typography.body(text));
        info!("Added citations to paragraph {}", index);
        rewritten.push(index);
    }

    AnnotationReport {
        examined,
        rewritten,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitdoc_ooxml::{OoxmlArchive, ParagraphBuilder, RunFormat};

    const LONG_TECH: &str =
        "Бекенд використовує Spring Boot 3.2.0 та MongoDB для зберігання даних.";
    const LONG_PATTERN: &str =
        "Застосовано Dependency Injection та Repository Pattern для слабкої зв'язності.";

    fn doc_with(paragraphs: &[&str]) -> Document {
        let mut archive = OoxmlArchive::new();
        let body: String = paragraphs
            .iter()
            .map(|t| ParagraphBuilder::new().run(*t, RunFormat::default()).to_xml())
            .collect();
        archive.set_string(
            "word/document.xml",
            format!(
                r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
            ),
        );
        Document::from_archive(archive).unwrap()
    }

    fn texts(doc: &Document) -> Vec<String> {
        doc.paragraphs().map(|p| p.text().to_string()).collect()
    }

    #[test]
    fn test_is_candidate_threshold() {
        assert!(!is_candidate("", 50));
        assert!(!is_candidate("   \t ", 50));
        assert!(!is_candidate("MongoDB", 50));
        // 50 Cyrillic characters count as 50, not 100 bytes
        let fifty = "ж".repeat(50);
        assert!(is_candidate(&fifty, 50));
        assert!(!is_candidate(&"ж".repeat(49), 50));
        assert!(is_candidate(&format!("   {fifty}   "), 50));
    }

    #[test]
    fn test_select_skips_short_and_unrelated_paragraphs() {
        let config = CitationConfig::builtin().unwrap();
        let unrelated = "Цей абзац достатньо довгий, але не містить жодних назв технологій.";
        let doc = doc_with(&["MongoDB", "", LONG_TECH, unrelated, LONG_PATTERN]);

        let candidates = select_paragraphs(&doc, &config);
        assert_eq!(
            candidates,
            vec![
                Candidate {
                    index: 2,
                    technologies: true,
                    patterns: false
                },
                Candidate {
                    index: 4,
                    technologies: false,
                    patterns: true
                },
            ]
        );
    }

    #[test]
    fn test_annotate_document_rewrites_candidates_only() {
        let config = CitationConfig::builtin().unwrap();
        let mut doc = doc_with(&["MongoDB", LONG_TECH, "", LONG_PATTERN]);

        let report = annotate_document(&mut doc, &config, &Typography::default());
        assert_eq!(report.rewritten, vec![1, 3]);
        assert_eq!(report.examined, 2);
        assert_eq!(
            texts(&doc),
            vec![
                "MongoDB".to_string(),
                "Бекенд використовує Spring Boot 3.2.0 [1] та MongoDB [5] для зберігання даних."
                    .to_string(),
                String::new(),
                "Застосовано Dependency Injection [17] та Repository Pattern [18] для слабкої зв'язності."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_both_maps_apply_to_one_paragraph() {
        let config = CitationConfig::builtin().unwrap();
        let mut doc = doc_with(&[
            "Багатошарова архітектура backend на Spring Boot 3.2.0 спрощує супровід системи.",
        ]);

        annotate_document(&mut doc, &config, &Typography::default());
        assert_eq!(
            texts(&doc),
            vec!["Багатошарова архітектура [16] backend на Spring Boot 3.2.0 [1] спрощує супровід системи."]
        );
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let config = CitationConfig::builtin().unwrap();
        let mut doc = doc_with(&[LONG_TECH, LONG_PATTERN]);

        annotate_document(&mut doc, &config, &Typography::default());
        let first = doc.to_xml();
        let report = annotate_document(&mut doc, &config, &Typography::default());

        assert!(report.rewritten.is_empty());
        assert_eq!(doc.to_xml(), first);
    }

    #[test]
    fn test_reference_list_is_never_annotated() {
        let config = CitationConfig::builtin().unwrap();
        let typography = Typography::default();
        let mut doc = doc_with(&[LONG_TECH]);

        annotate_document(&mut doc, &config, &typography);
        super::super::append_bibliography(&mut doc, &config.references, &typography);
        let first = doc.to_xml();

        let report = annotate_document(&mut doc, &config, &typography);
        assert!(report.rewritten.is_empty());
        assert_eq!(report.examined, 1);
        assert_eq!(doc.to_xml(), first);
    }

    #[test]
    fn test_rewritten_paragraph_uses_body_typography() {
        let config = CitationConfig::builtin().unwrap();
        let mut doc = doc_with(&[LONG_TECH]);

        annotate_document(&mut doc, &config, &Typography::default());
        let xml = doc.paragraphs().next().unwrap().xml().to_string();
        assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
        assert!(xml.contains(r#"<w:ind w:firstLine="720"/>"#));
        assert!(xml.contains(r#"w:ascii="Times New Roman""#));
    }

    #[test]
    fn test_custom_threshold() {
        let mut config = CitationConfig::builtin().unwrap();
        config.min_paragraph_len = 5;
        let mut doc = doc_with(&["MongoDB"]);

        let report = annotate_document(&mut doc, &config, &Typography::default());
        assert_eq!(report.rewritten, vec![0]);
        assert_eq!(texts(&doc), vec!["MongoDB [5]"]);
    }
}
