//! Report content model
//!
//! Fixed report parts are stored as TOML under `content/` and embedded in
//! the binary. Each part is a flat list of blocks appended in order.

use habitdoc_ooxml::Alignment;
use serde::Deserialize;

use super::ReportError;

/// A report part: a title for progress output and its blocks
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// One appended block
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        text: String,
        level: u8,
    },
    /// A single body paragraph
    Paragraph {
        text: String,
    },
    /// Several body paragraphs
    Paragraphs {
        items: Vec<String>,
    },
    /// Bold lead-in paragraph (e.g. before a task list)
    BoldParagraph {
        text: String,
    },
    /// `1. item`, `2. item`, ... with a left indent
    Numbered {
        items: Vec<String>,
    },
    /// Body paragraphs where empty strings become blank lines; with
    /// `bold_headers`, requirement group headers are bold
    Lines {
        items: Vec<String>,
        #[serde(default)]
        bold_headers: bool,
    },
    /// Shaded monospace listing
    Code {
        lines: Vec<String>,
    },
    /// Bold caption followed by an explanatory body paragraph
    Explanation {
        title: String,
        text: String,
    },
    /// Bold label run followed by a normal run
    Keywords {
        label: String,
        text: String,
    },
    /// Table of contents lines with dot leaders
    Toc {
        entries: Vec<TocEntry>,
    },
    /// Free-form runs with a given alignment (title page)
    Styled {
        align: Alignment,
        runs: Vec<StyledRun>,
    },
    Blank,
    PageBreak,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TocEntry {
    pub title: String,
    pub page: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StyledRun {
    pub text: String,
    /// Size in points; body size when absent
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub bold: bool,
}

/// The built-in report parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPart {
    /// Title page, contents, abstracts, introduction and chapter 1
    Coursework,
    /// Sections 3.4 to 3.6: requirements, use cases, data model
    Requirements,
    /// Chapter 4 with backend and frontend listings
    CodeListings,
}

impl ReportPart {
    pub fn all() -> [ReportPart; 3] {
        [
            ReportPart::Coursework,
            ReportPart::Requirements,
            ReportPart::CodeListings,
        ]
    }

    fn source(self) -> &'static str {
        match self {
            ReportPart::Coursework => include_str!("../../content/coursework.toml"),
            ReportPart::Requirements => include_str!("../../content/requirements.toml"),
            ReportPart::CodeListings => include_str!("../../content/code_listings.toml"),
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ReportPart::Coursework => "coursework.toml",
            ReportPart::Requirements => "requirements.toml",
            ReportPart::CodeListings => "code_listings.toml",
        }
    }

    /// Parse the embedded content
    pub fn load(self) -> Result<Section, ReportError> {
        Section::from_toml_str(self.source()).map_err(|source| ReportError::Content {
            part: self.file_name(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_part_parses() {
        for part in ReportPart::all() {
            let section = part.load().unwrap();
            assert!(!section.blocks.is_empty(), "{part:?} is empty");
        }
    }

    #[test]
    fn test_block_kinds_parse() {
        let toml = r#"
title = "demo"

[[blocks]]
kind = "heading"
text = "ВСТУП"
level = 1

[[blocks]]
kind = "blank"

[[blocks]]
kind = "code"
lines = ["fn main() {}", ""]

[[blocks]]
kind = "styled"
align = "right"
runs = [{ text = "Виконав:\n" }, { text = "Студент", size = 12.0, bold = true }]

[[blocks]]
kind = "lines"
items = ["NFR1. Продуктивність:", ""]
bold_headers = true
"#;
        let section = Section::from_toml_str(toml).unwrap();
        assert_eq!(section.blocks.len(), 5);
        assert_eq!(
            section.blocks[0],
            ContentBlock::Heading {
                text: "ВСТУП".to_string(),
                level: 1
            }
        );
        assert_eq!(section.blocks[1], ContentBlock::Blank);
        assert_eq!(
            section.blocks[2],
            ContentBlock::Code {
                lines: vec!["fn main() {}".to_string(), String::new()]
            }
        );
        match &section.blocks[3] {
            ContentBlock::Styled { align, runs } => {
                assert_eq!(*align, Alignment::Right);
                assert_eq!(runs[0].size, None);
                assert!(runs[1].bold);
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let toml = "title = \"x\"\n[[blocks]]\nkind = \"table\"\n";
        assert!(Section::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_coursework_starts_with_title_page() {
        let section = ReportPart::Coursework.load().unwrap();
        match &section.blocks[0] {
            ContentBlock::Styled { align, runs } => {
                assert_eq!(*align, Alignment::Center);
                assert!(runs[0].text.starts_with("Міністерство освіти і науки України"));
            }
            other => panic!("unexpected first block {other:?}"),
        }
    }
}
