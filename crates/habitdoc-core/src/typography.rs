//! Report typography
//!
//! Every block in the report is directly formatted: Times New Roman 14 pt,
//! justified body text with a half-inch first-line indent and 1.5 line
//! spacing. Level-1 headings are centered and two points larger.

use habitdoc_ooxml::{Alignment, LineSpacing, ParagraphBuilder, RunFormat};
use serde::{Deserialize, Serialize};

/// Body indent in inches
pub const INDENT: f32 = 0.5;

/// Font settings shared by every appended block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Font family
    pub font: String,
    /// Body size in points
    pub size: f32,
    /// Font used for code listings
    pub code_font: String,
    /// Code listing size in points
    pub code_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            size: 14.0,
            code_font: "Courier New".to_string(),
            code_size: 10.0,
        }
    }
}

impl Typography {
    /// A body-size run
    pub fn run(&self) -> RunFormat {
        RunFormat::new(&self.font, self.size)
    }

    /// A run in the body font at another size
    pub fn sized(&self, size: f32) -> RunFormat {
        RunFormat::new(&self.font, size)
    }

    /// A code listing run
    pub fn code_run(&self) -> RunFormat {
        RunFormat::new(&self.code_font, self.code_size)
    }

    /// Justified body paragraph with first-line indent and 1.5 spacing
    pub fn body(&self, text: impl Into<String>) -> ParagraphBuilder {
        self.body_format().run(text, self.run())
    }

    /// Body paragraph formatting with no runs yet
    pub fn body_format(&self) -> ParagraphBuilder {
        ParagraphBuilder::new()
            .align(Alignment::Justify)
            .first_line_indent(INDENT)
            .line_spacing(LineSpacing::OneAndHalf)
            .space_before(0.0)
            .space_after(0.0)
    }

    /// Heading paragraph using the template's `HeadingN` style
    ///
    /// Level 1 is centered at body size + 2; deeper levels are
    /// left-aligned at body size.
    pub fn heading(&self, text: impl Into<String>, level: u8) -> ParagraphBuilder {
        let level = level.clamp(1, 3);
        let (alignment, size) = if level == 1 {
            (Alignment::Center, self.size + 2.0)
        } else {
            (Alignment::Left, self.size)
        };
        ParagraphBuilder::new()
            .style(format!("Heading{level}"))
            .align(alignment)
            .run(text, self.sized(size).bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Typography::default();
        assert_eq!(t.font, "Times New Roman");
        assert_eq!(t.size, 14.0);
    }

    #[test]
    fn test_body_paragraph() {
        let xml = Typography::default().body("Текст").to_xml();
        assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
        assert!(xml.contains(r#"<w:ind w:firstLine="720"/>"#));
        assert!(xml.contains(r#"w:line="360""#));
        assert!(xml.contains(r#"<w:sz w:val="28"/>"#));
    }

    #[test]
    fn test_heading_levels() {
        let t = Typography::default();

        let h1 = t.heading("ВСТУП", 1).to_xml();
        assert!(h1.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(h1.contains(r#"<w:jc w:val="center"/>"#));
        assert!(h1.contains(r#"<w:sz w:val="32"/>"#));
        assert!(h1.contains("<w:b/>"));

        let h3 = t.heading("1.2.1 Habitica", 3).to_xml();
        assert!(h3.contains(r#"<w:pStyle w:val="Heading3"/>"#));
        assert!(h3.contains(r#"<w:jc w:val="left"/>"#));
        assert!(h3.contains(r#"<w:sz w:val="28"/>"#));
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let xml = Typography::default().heading("x", 7).to_xml();
        assert!(xml.contains(r#"<w:pStyle w:val="Heading3"/>"#));
    }
}
