//! Paragraph writer
//!
//! Builds `<w:p>` elements with direct formatting (alignment, indents,
//! spacing, shading and per-run fonts). Every block the report tools
//! append goes through [`ParagraphBuilder`], so the document never needs
//! custom styles beyond the heading styles already in the template.
//!
//! # Example
//!
//! ```
//! use habitdoc_ooxml::writer::{Alignment, ParagraphBuilder, RunFormat};
//!
//! let para = ParagraphBuilder::new()
//!     .align(Alignment::Justify)
//!     .first_line_indent(0.5)
//!     .run("Hello", RunFormat::new("Times New Roman", 14.0));
//! assert!(para.to_xml().contains("<w:jc w:val=\"both\"/>"));
//! ```

use serde::{Deserialize, Serialize};

/// Twips per inch
const TWIPS_PER_INCH: f32 = 1440.0;
/// Twips per point
const TWIPS_PER_POINT: f32 = 20.0;

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The `w:jc` value for this alignment
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// Line spacing rule, expressed as a multiple of single spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    Single,
    OneAndHalf,
    Double,
}

impl LineSpacing {
    /// Value for `w:spacing/@w:line` with `w:lineRule="auto"`
    pub fn line_value(self) -> u32 {
        match self {
            LineSpacing::Single => 240,
            LineSpacing::OneAndHalf => 360,
            LineSpacing::Double => 480,
        }
    }
}

/// Paragraph-level formatting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphFormat {
    /// Paragraph style ID (e.g. `Heading1`)
    pub style_id: Option<String>,
    pub alignment: Option<Alignment>,
    /// First-line indent in inches
    pub first_line_indent: Option<f32>,
    /// Left indent in inches
    pub left_indent: Option<f32>,
    /// Hanging indent in inches
    pub hanging_indent: Option<f32>,
    pub line_spacing: Option<LineSpacing>,
    /// Space before in points
    pub space_before: Option<f32>,
    /// Space after in points
    pub space_after: Option<f32>,
    /// Background fill as a hex colour without `#` (e.g. `F5F5F5`)
    pub shading: Option<String>,
}

impl ParagraphFormat {
    fn is_empty(&self) -> bool {
        *self == ParagraphFormat::default()
    }

    fn write_xml(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        out.push_str("<w:pPr>");
        if let Some(style) = &self.style_id {
            out.push_str(&format!("<w:pStyle w:val=\"{}\"/>", escape_xml(style)));
        }
        // Schema order inside pPr: shd, spacing, ind, jc
        if let Some(fill) = &self.shading {
            out.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                escape_xml(fill)
            ));
        }
        if self.space_before.is_some() || self.space_after.is_some() || self.line_spacing.is_some()
        {
            out.push_str("<w:spacing");
            if let Some(pt) = self.space_before {
                out.push_str(&format!(" w:before=\"{}\"", points_to_twips(pt)));
            }
            if let Some(pt) = self.space_after {
                out.push_str(&format!(" w:after=\"{}\"", points_to_twips(pt)));
            }
            if let Some(spacing) = self.line_spacing {
                out.push_str(&format!(
                    " w:line=\"{}\" w:lineRule=\"auto\"",
                    spacing.line_value()
                ));
            }
            out.push_str("/>");
        }
        if self.left_indent.is_some()
            || self.first_line_indent.is_some()
            || self.hanging_indent.is_some()
        {
            out.push_str("<w:ind");
            if let Some(inches) = self.left_indent {
                out.push_str(&format!(" w:left=\"{}\"", inches_to_twips(inches)));
            }
            if let Some(inches) = self.hanging_indent {
                out.push_str(&format!(" w:hanging=\"{}\"", inches_to_twips(inches)));
            } else if let Some(inches) = self.first_line_indent {
                out.push_str(&format!(" w:firstLine=\"{}\"", inches_to_twips(inches)));
            }
            out.push_str("/>");
        }
        if let Some(alignment) = self.alignment {
            out.push_str(&format!("<w:jc w:val=\"{}\"/>", alignment.as_ooxml()));
        }
        out.push_str("</w:pPr>");
    }
}

/// Run-level formatting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFormat {
    /// Font family applied to every script slot (ascii, hAnsi, eastAsia, cs)
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f32>,
    pub bold: bool,
    pub italic: bool,
}

impl RunFormat {
    /// A run in the given font and size
    pub fn new(font: impl Into<String>, size: f32) -> Self {
        Self {
            font: Some(font.into()),
            size: Some(size),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn write_xml(&self, out: &mut String) {
        if *self == RunFormat::default() {
            return;
        }
        out.push_str("<w:rPr>");
        if let Some(font) = &self.font {
            let font = escape_xml(font);
            out.push_str(&format!(
                "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:eastAsia=\"{font}\" w:cs=\"{font}\"/>"
            ));
        }
        if self.bold {
            out.push_str("<w:b/><w:bCs/>");
        }
        if self.italic {
            out.push_str("<w:i/><w:iCs/>");
        }
        if let Some(size) = self.size {
            let half_points = (size * 2.0).round() as u32;
            out.push_str(&format!(
                "<w:sz w:val=\"{half_points}\"/><w:szCs w:val=\"{half_points}\"/>"
            ));
        }
        out.push_str("</w:rPr>");
    }
}

/// Inline content of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub enum Run {
    /// Formatted text. `\n` becomes a line break and `\t` a tab.
    Text { text: String, format: RunFormat },
    /// Hard page break
    PageBreak,
}

/// Builder for a single `<w:p>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphBuilder {
    pub format: ParagraphFormat,
    pub runs: Vec<Run>,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty paragraph
    pub fn empty() -> Self {
        Self::default()
    }

    /// A paragraph holding only a page break
    pub fn page_break() -> Self {
        Self {
            format: ParagraphFormat::default(),
            runs: vec![Run::PageBreak],
        }
    }

    pub fn style(mut self, style_id: impl Into<String>) -> Self {
        self.format.style_id = Some(style_id.into());
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.format.alignment = Some(alignment);
        self
    }

    /// First-line indent in inches
    pub fn first_line_indent(mut self, inches: f32) -> Self {
        self.format.first_line_indent = Some(inches);
        self
    }

    /// Left indent in inches
    pub fn left_indent(mut self, inches: f32) -> Self {
        self.format.left_indent = Some(inches);
        self
    }

    /// Hanging indent in inches (wins over a first-line indent)
    pub fn hanging_indent(mut self, inches: f32) -> Self {
        self.format.hanging_indent = Some(inches);
        self
    }

    pub fn line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.format.line_spacing = Some(spacing);
        self
    }

    /// Space before in points
    pub fn space_before(mut self, points: f32) -> Self {
        self.format.space_before = Some(points);
        self
    }

    /// Space after in points
    pub fn space_after(mut self, points: f32) -> Self {
        self.format.space_after = Some(points);
        self
    }

    /// Background fill, hex without `#`
    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.format.shading = Some(fill.into());
        self
    }

    /// Append a text run
    pub fn run(mut self, text: impl Into<String>, format: RunFormat) -> Self {
        self.runs.push(Run::Text {
            text: text.into(),
            format,
        });
        self
    }

    /// Plain text of the paragraph as a reader would extract it
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|run| match run {
                Run::Text { text, .. } => Some(text.as_str()),
                Run::PageBreak => None,
            })
            .collect()
    }

    /// Serialize to a `<w:p>` element
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<w:p>");
        self.format.write_xml(&mut out);
        for run in &self.runs {
            match run {
                Run::Text { text, format } => write_text_run(&mut out, text, format),
                Run::PageBreak => out.push_str("<w:r><w:br w:type=\"page\"/></w:r>"),
            }
        }
        out.push_str("</w:p>");
        out
    }
}

fn write_text_run(out: &mut String, text: &str, format: &RunFormat) {
    out.push_str("<w:r>");
    format.write_xml(out);

    let mut segment = String::new();
    let flush = |segment: &mut String, out: &mut String| {
        if !segment.is_empty() {
            out.push_str(&format!(
                "<w:t xml:space=\"preserve\">{}</w:t>",
                escape_xml(segment)
            ));
            segment.clear();
        }
    };
    for ch in text.chars() {
        match ch {
            '\n' => {
                flush(&mut segment, out);
                out.push_str("<w:br/>");
            }
            '\t' => {
                flush(&mut segment, out);
                out.push_str("<w:tab/>");
            }
            _ => segment.push(ch),
        }
    }
    flush(&mut segment, out);
    out.push_str("</w:r>");
}

fn inches_to_twips(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

fn points_to_twips(points: f32) -> i32 {
    (points * TWIPS_PER_POINT).round() as i32
}

/// Escape special XML characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
