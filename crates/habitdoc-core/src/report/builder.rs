//! Appends typed report blocks to a document

use habitdoc_ooxml::{Alignment, Document, LineSpacing, ParagraphBuilder};

use super::content::{ContentBlock, Section, StyledRun, TocEntry};
use crate::typography::{Typography, INDENT};

/// Width the table of contents pads entries to with dots
const TOC_WIDTH: usize = 100;

/// Shading behind code listings
const CODE_SHADING: &str = "F5F5F5";

/// Appends formatted blocks to the end of a document
pub struct ReportBuilder<'a> {
    doc: &'a mut Document,
    typography: &'a Typography,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(doc: &'a mut Document, typography: &'a Typography) -> Self {
        Self { doc, typography }
    }

    /// Append every block of a section; returns the number of blocks
    pub fn render(&mut self, section: &Section) -> usize {
        for block in &section.blocks {
            self.block(block);
        }
        section.blocks.len()
    }

    pub fn block(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Heading { text, level } => self.heading(text, *level),
            ContentBlock::Paragraph { text } => self.paragraph(text),
            ContentBlock::Paragraphs { items } => {
                for text in items {
                    self.paragraph(text);
                }
            }
            ContentBlock::BoldParagraph { text } => self.bold_paragraph(text),
            ContentBlock::Numbered { items } => self.numbered_list(items),
            ContentBlock::Lines {
                items,
                bold_headers,
            } => self.lines(items, *bold_headers),
            ContentBlock::Code { lines } => self.code_block(lines),
            ContentBlock::Explanation { title, text } => self.explanation(title, text),
            ContentBlock::Keywords { label, text } => self.keywords(label, text),
            ContentBlock::Toc { entries } => self.toc(entries),
            ContentBlock::Styled { align, runs } => self.styled(*align, runs),
            ContentBlock::Blank => self.blank(),
            ContentBlock::PageBreak => self.page_break(),
        }
    }

    pub fn heading(&mut self, text: &str, level: u8) {
        self.doc.append(&self.typography.heading(text, level));
    }

    pub fn paragraph(&mut self, text: &str) {
        self.doc.append(&self.typography.body(text));
    }

    pub fn bold_paragraph(&mut self, text: &str) {
        self.doc.append(
            &self
                .typography
                .body_format()
                .run(text, self.typography.run().bold()),
        );
    }

    /// `1. item` lines, left-indented, no first-line indent
    pub fn numbered_list<S: AsRef<str>>(&mut self, items: &[S]) {
        for (i, item) in items.iter().enumerate() {
            self.doc.append(
                &ParagraphBuilder::new()
                    .align(Alignment::Justify)
                    .left_indent(INDENT)
                    .line_spacing(LineSpacing::OneAndHalf)
                    .run(
                        format!("{}. {}", i + 1, item.as_ref()),
                        self.typography.run(),
                    ),
            );
        }
    }

    /// One shaded paragraph holding the whole listing
    pub fn code_block<S: AsRef<str>>(&mut self, lines: &[S]) {
        let code = lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        self.doc.append(
            &ParagraphBuilder::new()
                .align(Alignment::Left)
                .left_indent(INDENT)
                .line_spacing(LineSpacing::Single)
                .space_before(6.0)
                .space_after(6.0)
                .shading(CODE_SHADING)
                .run(code, self.typography.code_run()),
        );
    }

    /// Bold caption one point below body size, then a body paragraph
    pub fn explanation(&mut self, title: &str, text: &str) {
        self.doc.append(
            &ParagraphBuilder::new()
                .align(Alignment::Justify)
                .line_spacing(LineSpacing::OneAndHalf)
                .space_before(12.0)
                .run(
                    title,
                    self.typography.sized(self.typography.size - 1.0).bold(),
                ),
        );
        self.paragraph(text);
    }

    /// Bold label run then normal text, without a first-line indent
    pub fn keywords(&mut self, label: &str, text: &str) {
        self.doc.append(
            &ParagraphBuilder::new()
                .align(Alignment::Justify)
                .line_spacing(LineSpacing::OneAndHalf)
                .run(label, self.typography.run().bold())
                .run(text, self.typography.run()),
        );
    }

    pub fn toc(&mut self, entries: &[TocEntry]) {
        for entry in entries {
            self.doc.append(
                &ParagraphBuilder::new()
                    .align(Alignment::Left)
                    .line_spacing(LineSpacing::OneAndHalf)
                    .run(toc_line(&entry.title, &entry.page), self.typography.run()),
            );
        }
    }

    pub fn styled(&mut self, align: Alignment, runs: &[StyledRun]) {
        let mut paragraph = ParagraphBuilder::new().align(align);
        for run in runs {
            let mut format = self
                .typography
                .sized(run.size.unwrap_or(self.typography.size));
            if run.bold {
                format = format.bold();
            }
            paragraph = paragraph.run(run.text.as_str(), format);
        }
        self.doc.append(&paragraph);
    }

    /// Body lines where empty strings are blank paragraphs
    pub fn lines<S: AsRef<str>>(&mut self, items: &[S], bold_headers: bool) {
        for item in items {
            let item = item.as_ref();
            if item.is_empty() {
                self.blank();
            } else if bold_headers && is_requirement_heading(item) {
                self.bold_paragraph(item);
            } else {
                self.paragraph(item);
            }
        }
    }

    pub fn blank(&mut self) {
        self.doc.add_empty_paragraph();
    }

    pub fn page_break(&mut self) {
        self.doc.add_page_break();
    }
}

/// A contents line: numbered entries are indented four spaces, then dot
/// leaders pad the title before the page number
///
/// The leader length depends on the title alone, so indented entries end
/// four characters further right.
pub fn toc_line(title: &str, page: &str) -> String {
    let dots = ".".repeat(TOC_WIDTH.saturating_sub(title.chars().count()));
    if title.starts_with(|c: char| c.is_ascii_digit()) {
        format!("    {title} {dots} {page}")
    } else {
        format!("{title} {dots} {page}")
    }
}

/// True for requirement group headers like `FR3.` or `NFR1. Продуктивність:`
///
/// Sub-items such as `NFR1.1. ...` are not headers.
pub fn is_requirement_heading(text: &str) -> bool {
    let rest = text
        .strip_prefix("NFR")
        .or_else(|| text.strip_prefix("FR"));
    let Some(rest) = rest else {
        return false;
    };
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    let Some(after) = rest[digits..].strip_prefix('.') else {
        return false;
    };
    after.is_empty() || after.starts_with(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new("Times New Roman", 14.0).unwrap()
    }

    #[test]
    fn test_requirement_headings() {
        assert!(is_requirement_heading("NFR1. Продуктивність:"));
        assert!(is_requirement_heading("FR12. Керування групами"));
        assert!(is_requirement_heading("NFR3."));
        assert!(!is_requirement_heading("NFR1.1. Час відгуку API"));
        assert!(!is_requirement_heading("NFR. Загальні"));
        assert!(!is_requirement_heading("Функціональні вимоги"));
        assert!(!is_requirement_heading("FRAMEWORK1. x"));
    }

    #[test]
    fn test_toc_line_padding() {
        let line = toc_line("ВСТУП", "6");
        assert!(line.starts_with("ВСТУП ."));
        assert!(line.ends_with(". 6"));
        // 5 title chars + 95 dots + two spaces + page
        assert_eq!(line.chars().count(), 5 + 95 + 2 + 1);

        let numbered = toc_line("1.1 Аналіз", "8");
        assert!(numbered.starts_with("    1.1 Аналіз ."));
        assert_eq!(numbered.chars().count(), 4 + 10 + 90 + 2 + 1);
    }

    #[test]
    fn test_toc_line_long_title_has_no_dots() {
        let title = "x".repeat(120);
        assert_eq!(toc_line(&title, "9"), format!("{title}  9"));
    }

    #[test]
    fn test_numbered_list() {
        let mut doc = doc();
        let typography = Typography::default();
        ReportBuilder::new(&mut doc, &typography).numbered_list(&["перше", "друге"]);

        let texts: Vec<_> = doc.paragraphs().map(|p| p.text().to_string()).collect();
        assert_eq!(texts, vec!["1. перше", "2. друге"]);
        assert!(doc.paragraphs().all(|p| p.xml().contains(r#"<w:ind w:left="720"/>"#)));
    }

    #[test]
    fn test_code_block_is_one_shaded_paragraph() {
        let mut doc = doc();
        let typography = Typography::default();
        ReportBuilder::new(&mut doc, &typography).code_block(&["class A {", "}"]);

        assert_eq!(doc.paragraph_count(), 1);
        let p = doc.paragraphs().next().unwrap();
        assert_eq!(p.text(), "class A {\n}");
        assert!(p.xml().contains(r#"w:fill="F5F5F5""#));
        assert!(p.xml().contains("Courier New"));
        assert!(p.xml().contains(r#"<w:sz w:val="20"/>"#));
    }

    #[test]
    fn test_lines_with_bold_headers() {
        let mut doc = doc();
        let typography = Typography::default();
        ReportBuilder::new(&mut doc, &typography).lines(
            &["NFR1. Продуктивність:", "NFR1.1. Час відгуку", ""],
            true,
        );

        let paras: Vec<_> = doc.paragraphs().collect();
        assert_eq!(paras.len(), 3);
        assert!(paras[0].xml().contains("<w:b/>"));
        assert!(!paras[1].xml().contains("<w:b/>"));
        assert!(paras[2].is_blank());
    }

    #[test]
    fn test_keywords_have_bold_label() {
        let mut doc = doc();
        let typography = Typography::default();
        ReportBuilder::new(&mut doc, &typography).keywords("Keywords: ", "habits, React");

        let p = doc.paragraphs().next().unwrap();
        assert_eq!(p.text(), "Keywords: habits, React");
        assert_eq!(p.xml().matches("<w:b/>").count(), 1);
    }

    #[test]
    fn test_explanation_adds_caption_and_body() {
        let mut doc = doc();
        let typography = Typography::default();
        ReportBuilder::new(&mut doc, &typography).explanation("Модель User", "Опис моделі.");

        let paras: Vec<_> = doc.paragraphs().collect();
        assert_eq!(paras.len(), 2);
        assert!(paras[0].xml().contains(r#"<w:sz w:val="26"/>"#));
        assert!(paras[0].xml().contains(r#"w:before="240""#));
        assert_eq!(paras[1].text(), "Опис моделі.");
    }

    #[test]
    fn test_render_counts_blocks() {
        let section = Section::from_toml_str(
            r#"
title = "t"
[[blocks]]
kind = "page_break"
[[blocks]]
kind = "heading"
text = "РОЗДІЛ 4"
level = 1
[[blocks]]
kind = "paragraphs"
items = ["a", "b"]
"#,
        )
        .unwrap();
        let mut doc = doc();
        let typography = Typography::default();
        let rendered = ReportBuilder::new(&mut doc, &typography).render(&section);

        assert_eq!(rendered, 3);
        assert_eq!(doc.paragraph_count(), 4);
    }
}
