//! The numbered reference list appended at the end of the report

use habitdoc_ooxml::{Alignment, Document, LineSpacing, Paragraph, ParagraphBuilder};

use super::ReferenceTable;
use crate::typography::{Typography, INDENT};

/// Heading of the reference list section
pub const BIBLIOGRAPHY_HEADING: &str = "ПЕРЕЛІК ПОСИЛАНЬ";

/// `"{id}. {text}"` lines in ascending id order
pub fn format_entries(references: &ReferenceTable) -> Vec<String> {
    references
        .sorted_by_id()
        .into_iter()
        .map(|entry| format!("{}. {}", entry.id, entry.text))
        .collect()
}

/// True for the level-1 heading that opens the reference list
pub fn is_bibliography_heading(para: &Paragraph) -> bool {
    para.style_id() == Some("Heading1") && para.text().trim() == BIBLIOGRAPHY_HEADING
}

/// True if the document already ends in (or contains) a reference list
pub fn has_bibliography(doc: &Document) -> bool {
    doc.paragraphs().any(is_bibliography_heading)
}

/// Append a page break, the section heading, a blank line and one
/// hanging-indent paragraph per reference
pub fn append_bibliography(
    doc: &mut Document,
    references: &ReferenceTable,
    typography: &Typography,
) {
    doc.add_page_break();
    doc.append(&typography.heading(BIBLIOGRAPHY_HEADING, 1));
    doc.add_empty_paragraph();

    for line in format_entries(references) {
        doc.append(
            &ParagraphBuilder::new()
                .align(Alignment::Justify)
                .left_indent(INDENT)
                .hanging_indent(INDENT)
                .line_spacing(LineSpacing::Single)
                .space_after(6.0)
                .run(line, typography.run()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citations::{builtin_references, ReferenceEntry};

    #[test]
    fn test_entries_sorted_regardless_of_input_order() {
        let table = ReferenceTable::new([
            ("c", ReferenceEntry::new(3, "Third")),
            ("a", ReferenceEntry::new(1, "First")),
            ("b", ReferenceEntry::new(2, "Second")),
        ])
        .unwrap();
        assert_eq!(
            format_entries(&table),
            vec!["1. First", "2. Second", "3. Third"]
        );
    }

    #[test]
    fn test_builtin_entries() {
        let lines = format_entries(&builtin_references().unwrap());
        assert_eq!(lines.len(), 20);
        assert!(lines[0].starts_with("1. Spring Boot Reference Documentation."));
        assert!(lines[19].starts_with("20. Abramov D., Clark A. Thinking in React."));
    }

    #[test]
    fn test_append_bibliography_layout() {
        let mut doc = Document::new("Times New Roman", 14.0).unwrap();
        assert!(!has_bibliography(&doc));

        let table = ReferenceTable::new([
            ("b", ReferenceEntry::new(2, "Second & last")),
            ("a", ReferenceEntry::new(1, "First")),
        ])
        .unwrap();
        append_bibliography(&mut doc, &table, &Typography::default());

        let paras: Vec<_> = doc.paragraphs().collect();
        assert_eq!(paras.len(), 5);
        assert!(paras[0].xml().contains(r#"<w:br w:type="page"/>"#));
        assert_eq!(paras[1].text(), BIBLIOGRAPHY_HEADING);
        assert!(paras[1].xml().contains(r#"<w:jc w:val="center"/>"#));
        assert!(paras[2].is_blank());
        assert_eq!(paras[3].text(), "1. First");
        assert_eq!(paras[4].text(), "2. Second & last");

        let entry = paras[3].xml();
        assert!(entry.contains(r#"<w:ind w:left="720" w:hanging="720"/>"#));
        assert!(entry.contains(r#"w:after="120""#));
        assert!(entry.contains(r#"w:line="240""#));

        assert!(has_bibliography(&doc));
    }
}
