//! Document body editing (word/document.xml)
//!
//! The body is split into its top-level children. Paragraphs expose their
//! plain text and can be rewritten in place; every other child (tables,
//! bookmarks, content controls) is carried through verbatim. The trailing
//! section properties stay last, so appended content lands in front of them.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::{OoxmlArchive, DOCUMENT_PART};
use crate::error::{OoxmlError, Result};
use crate::template;
use crate::writer::ParagraphBuilder;

/// A Word document open for editing
#[derive(Debug, Clone)]
pub struct Document {
    archive: OoxmlArchive,
    /// Everything up to and including `<w:body>`
    head: String,
    blocks: Vec<Block>,
    /// Trailing `<w:sectPr>` of the body
    section: Option<String>,
    /// `</w:body>` and everything after it
    tail: String,
}

/// A top-level child of `<w:body>`
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    /// Any other element, kept as raw XML
    Other(String),
}

/// A body paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    xml: String,
    text: String,
    style_id: Option<String>,
}

impl Paragraph {
    /// Create a paragraph from a builder
    pub fn from_builder(builder: &ParagraphBuilder) -> Self {
        Self {
            xml: builder.to_xml(),
            text: builder.text(),
            style_id: builder.format.style_id.clone(),
        }
    }

    /// Plain text: run text with tabs as `\t` and line breaks as `\n`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Paragraph style ID, if the paragraph names one
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref()
    }

    /// Raw `<w:p>` XML
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// True when the paragraph has no visible text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the paragraph's content and formatting
    ///
    /// A style the paragraph already names is kept unless the builder
    /// sets its own.
    pub fn replace(&mut self, builder: &ParagraphBuilder) {
        let mut builder = builder.clone();
        if builder.format.style_id.is_none() {
            builder.format.style_id = self.style_id.clone();
        }
        *self = Paragraph::from_builder(&builder);
    }
}

impl Document {
    /// Create an empty document from the built-in blank package
    pub fn new(font: &str, size_pt: f32) -> Result<Self> {
        Self::from_archive(template::blank_package(font, size_pt))
    }

    /// Open a DOCX file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_archive(OoxmlArchive::open(path)?)
    }

    /// Open a DOCX held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_archive(OoxmlArchive::from_bytes(bytes)?)
    }

    /// Split the archive's main document part into body blocks
    pub fn from_archive(archive: OoxmlArchive) -> Result<Self> {
        let xml = archive.document_xml()?;
        let body = parse_body(&xml)?;
        Ok(Self {
            archive,
            head: body.head,
            blocks: body.blocks,
            section: body.section,
            tail: body.tail,
        })
    }

    /// The underlying package
    pub fn archive(&self) -> &OoxmlArchive {
        &self.archive
    }

    /// All body blocks in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Body paragraphs in document order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            Block::Other(_) => None,
        })
    }

    /// Mutable body paragraphs in document order
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.blocks.iter_mut().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            Block::Other(_) => None,
        })
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// True if some paragraph's trimmed text equals `text`
    pub fn has_paragraph(&self, text: &str) -> bool {
        self.paragraphs().any(|p| p.text().trim() == text)
    }

    /// Append a paragraph at the end of the body
    pub fn append(&mut self, builder: &ParagraphBuilder) {
        self.blocks
            .push(Block::Paragraph(Paragraph::from_builder(builder)));
    }

    pub fn add_page_break(&mut self) {
        self.append(&ParagraphBuilder::page_break());
    }

    pub fn add_empty_paragraph(&mut self) {
        self.append(&ParagraphBuilder::empty());
    }

    /// Reassemble word/document.xml
    pub fn to_xml(&self) -> String {
        let capacity = self.head.len() + self.tail.len() + 64 * self.blocks.len();
        let mut xml = String::with_capacity(capacity);
        xml.push_str(&self.head);
        for block in &self.blocks {
            match block {
                Block::Paragraph(p) => xml.push_str(&p.xml),
                Block::Other(raw) => xml.push_str(raw),
            }
        }
        if let Some(section) = &self.section {
            xml.push_str(section);
        }
        xml.push_str(&self.tail);
        xml
    }

    /// The package with the current body written into the document part
    fn packed_archive(&self) -> OoxmlArchive {
        let mut archive = self.archive.clone();
        archive.set_string(DOCUMENT_PART, self.to_xml());
        archive
    }

    /// Pack the document into DOCX bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.packed_archive().to_bytes()
    }

    /// Write the document to disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.packed_archive().write_to_file(path)
    }
}

struct ParsedBody {
    head: String,
    blocks: Vec<Block>,
    section: Option<String>,
    tail: String,
}

/// State for the body child currently being read
#[derive(Default)]
struct ChildState {
    start: usize,
    kind: ChildKind,
    text: String,
    style_id: Option<String>,
    run_depth: usize,
    in_text: bool,
}

#[derive(Default, PartialEq)]
enum ChildKind {
    Paragraph,
    Section,
    #[default]
    Other,
}

fn parse_body(xml: &str) -> Result<ParsedBody> {
    let mut reader = Reader::from_str(xml);
    // Don't trim text - run text keeps its spaces
    reader.config_mut().trim_text(false);

    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut content_start: Option<usize> = None;
    let mut content_end: Option<usize> = None;
    let mut empty_body: Option<(usize, usize)> = None;

    let mut blocks = Vec::new();
    let mut section: Option<String> = None;
    let mut child = ChildState::default();

    loop {
        let pos = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(ref e) => {
                depth += 1;
                let local = e.local_name();
                match body_depth {
                    None if content_end.is_none() && local.as_ref() == b"body" => {
                        body_depth = Some(depth);
                        content_start = Some(reader.buffer_position() as usize);
                    }
                    Some(bd) if depth == bd + 1 => {
                        child = ChildState {
                            start: pos,
                            kind: child_kind(local.as_ref()),
                            ..ChildState::default()
                        };
                    }
                    Some(_) if child.kind == ChildKind::Paragraph => match local.as_ref() {
                        b"r" => child.run_depth += 1,
                        b"t" if child.run_depth > 0 => child.in_text = true,
                        _ => {}
                    },
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                let local = e.local_name();
                let end = reader.buffer_position() as usize;
                match body_depth {
                    None if content_end.is_none() && local.as_ref() == b"body" => {
                        empty_body = Some((pos, end));
                        content_end = Some(end);
                    }
                    Some(bd) if depth == bd => {
                        let raw = slice(xml, pos, end)?;
                        let kind = child_kind(local.as_ref());
                        let block = match kind {
                            ChildKind::Paragraph => Block::Paragraph(Paragraph {
                                xml: raw.to_string(),
                                text: String::new(),
                                style_id: None,
                            }),
                            _ => Block::Other(raw.to_string()),
                        };
                        push_child(&mut blocks, &mut section, kind, block);
                    }
                    Some(_) if child.kind == ChildKind::Paragraph => {
                        paragraph_marker(&mut child, local.as_ref(), e);
                    }
                    _ => {}
                }
            }
            Event::End(ref e) => {
                let local = e.local_name();
                match body_depth {
                    Some(bd) if depth == bd => {
                        content_end = Some(pos);
                        body_depth = None;
                    }
                    Some(bd) if depth == bd + 1 => {
                        let end = reader.buffer_position() as usize;
                        let raw = slice(xml, child.start, end)?.to_string();
                        let state = std::mem::take(&mut child);
                        let block = match state.kind {
                            ChildKind::Paragraph => Block::Paragraph(Paragraph {
                                xml: raw,
                                text: state.text,
                                style_id: state.style_id,
                            }),
                            _ => Block::Other(raw),
                        };
                        push_child(&mut blocks, &mut section, state.kind, block);
                    }
                    Some(_) if child.kind == ChildKind::Paragraph => match local.as_ref() {
                        b"r" => child.run_depth = child.run_depth.saturating_sub(1),
                        b"t" => child.in_text = false,
                        _ => {}
                    },
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(ref t) if child.in_text => {
                child.text.push_str(&t.unescape()?);
            }
            Event::CData(ref c) if child.in_text => {
                child.text.push_str(&String::from_utf8_lossy(c));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some((start, end)) = empty_body {
        return Ok(ParsedBody {
            head: format!("{}<w:body>", slice(xml, 0, start)?),
            blocks,
            section,
            tail: format!("</w:body>{}", slice(xml, end, xml.len())?),
        });
    }

    match (content_start, content_end) {
        (Some(start), Some(end)) => Ok(ParsedBody {
            head: slice(xml, 0, start)?.to_string(),
            blocks,
            section,
            tail: slice(xml, end, xml.len())?.to_string(),
        }),
        _ => Err(OoxmlError::InvalidStructure(
            "word/document.xml has no <w:body>".to_string(),
        )),
    }
}

fn child_kind(local: &[u8]) -> ChildKind {
    match local {
        b"p" => ChildKind::Paragraph,
        b"sectPr" => ChildKind::Section,
        _ => ChildKind::Other,
    }
}

/// Only a trailing sectPr is treated as the body's section properties
fn push_child(
    blocks: &mut Vec<Block>,
    section: &mut Option<String>,
    kind: ChildKind,
    block: Block,
) {
    if let Some(previous) = section.take() {
        blocks.push(Block::Other(previous));
    }
    match (kind, block) {
        (ChildKind::Section, Block::Other(raw)) => *section = Some(raw),
        (_, block) => blocks.push(block),
    }
}

/// Empty elements inside a paragraph that contribute to its text
fn paragraph_marker(child: &mut ChildState, local: &[u8], e: &BytesStart) {
    match local {
        b"pStyle" if child.style_id.is_none() => {
            child.style_id = get_attr(e, b"w:val");
        }
        b"tab" if child.run_depth > 0 => child.text.push('\t'),
        b"cr" if child.run_depth > 0 => child.text.push('\n'),
        b"br" if child.run_depth > 0 => {
            let is_page = get_attr(e, b"w:type").is_some_and(|t| t == "page" || t == "column");
            if !is_page {
                child.text.push('\n');
            }
        }
        _ => {}
    }
}

fn slice(xml: &str, start: usize, end: usize) -> Result<&str> {
    xml.get(start..end).ok_or_else(|| {
        OoxmlError::InvalidStructure(format!("element boundary {start}..{end} is not valid"))
    })
}

fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{Alignment, RunFormat};

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    fn archive_with(body: &str) -> OoxmlArchive {
        let mut archive = OoxmlArchive::new();
        archive.set_string(
            DOCUMENT_PART,
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><w:document {NS}><w:body>{body}</w:body></w:document>"#
            ),
        );
        archive
    }

    #[test]
    fn test_parse_simple_paragraph() {
        let doc = Document::from_archive(archive_with(
            "<w:p><w:r><w:t>Hello, world!</w:t></w:r></w:p>",
        ))
        .unwrap();
        let texts: Vec<_> = doc.paragraphs().map(|p| p.text().to_string()).collect();
        assert_eq!(texts, vec!["Hello, world!"]);
    }

    #[test]
    fn test_text_joins_runs_and_keeps_spaces() {
        let doc = Document::from_archive(archive_with(
            r#"<w:p><w:r><w:t xml:space="preserve">Spring </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>Boot</w:t></w:r></w:p>"#,
        ))
        .unwrap();
        assert_eq!(doc.paragraphs().next().unwrap().text(), "Spring Boot");
    }

    #[test]
    fn test_ignore_field_codes() {
        let doc = Document::from_archive(archive_with(
            r#"<w:p><w:r><w:fldChar w:fldCharType="begin"/></w:r><w:r><w:instrText>TOC \o "1-3"</w:instrText></w:r><w:r><w:t>Зміст</w:t></w:r></w:p>"#,
        ))
        .unwrap();
        assert_eq!(doc.paragraphs().next().unwrap().text(), "Зміст");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let doc = Document::from_archive(archive_with(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="right" w:pos="9000"/></w:tabs></w:pPr><w:r><w:t>A &amp; B</w:t><w:tab/><w:t>1</w:t><w:br/><w:t>2</w:t><w:br w:type="page"/></w:r></w:p>"#,
        ))
        .unwrap();
        assert_eq!(doc.paragraphs().next().unwrap().text(), "A & B\t1\n2");
    }

    #[test]
    fn test_style_id_is_read() {
        let doc = Document::from_archive(archive_with(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>1.1 Мета</w:t></w:r></w:p>"#,
        ))
        .unwrap();
        assert_eq!(
            doc.paragraphs().next().unwrap().style_id(),
            Some("Heading2")
        );
    }

    #[test]
    fn test_tables_are_preserved_verbatim() {
        let table = "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>";
        let doc = Document::from_archive(archive_with(&format!(
            "<w:p><w:r><w:t>before</w:t></w:r></w:p>{table}<w:p/>"
        )))
        .unwrap();

        assert_eq!(doc.blocks().len(), 3);
        assert_eq!(doc.blocks()[1], Block::Other(table.to_string()));
        // Table cell paragraphs are not body paragraphs
        assert_eq!(doc.paragraph_count(), 2);
        assert!(doc.to_xml().contains(table));
    }

    #[test]
    fn test_appended_blocks_go_before_section_properties() {
        let mut doc = Document::from_archive(archive_with(
            r#"<w:p><w:r><w:t>first</w:t></w:r></w:p><w:sectPr><w:pgSz w:w="11906"/></w:sectPr>"#,
        ))
        .unwrap();
        doc.append(&ParagraphBuilder::new().run("second", RunFormat::default()));

        let xml = doc.to_xml();
        let second = xml.find("second").unwrap();
        let sect = xml.find("<w:sectPr>").unwrap();
        assert!(second < sect);
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_unchanged_document_reassembles_identically() {
        let body = r#"<w:p><w:r><w:t>one</w:t></w:r></w:p>
            <w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>two</w:t></w:r></w:p>
            <w:sectPr/>"#;
        let doc = Document::from_archive(archive_with(body)).unwrap();
        let xml = doc.to_xml();
        // Whitespace between body children is dropped, content is not
        assert_eq!(
            xml,
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><w:document {NS}><w:body><w:p><w:r><w:t>one</w:t></w:r></w:p><w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>two</w:t></w:r></w:p><w:sectPr/></w:body></w:document>"#
            )
        );
    }

    #[test]
    fn test_empty_body_element() {
        let mut archive = OoxmlArchive::new();
        archive.set_string(
            DOCUMENT_PART,
            format!(r#"<w:document {NS}><w:body/></w:document>"#),
        );
        let mut doc = Document::from_archive(archive).unwrap();
        assert_eq!(doc.paragraph_count(), 0);

        doc.add_empty_paragraph();
        assert_eq!(
            doc.to_xml(),
            format!(r#"<w:document {NS}><w:body><w:p></w:p></w:body></w:document>"#)
        );
    }

    #[test]
    fn test_missing_body_is_invalid() {
        let mut archive = OoxmlArchive::new();
        archive.set_string(DOCUMENT_PART, format!(r#"<w:document {NS}/>"#));
        let err = Document::from_archive(archive).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidStructure(_)));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let mut archive = OoxmlArchive::new();
        archive.set_string(
            DOCUMENT_PART,
            format!(r#"<w:document {NS}><w:body><w:p></w:r></w:body></w:document>"#),
        );
        assert!(Document::from_archive(archive).is_err());
    }

    #[test]
    fn test_replace_keeps_existing_style() {
        let mut doc = Document::from_archive(archive_with(
            r#"<w:p><w:pPr><w:pStyle w:val="ListParagraph"/></w:pPr><w:r><w:t>old</w:t></w:r></w:p>"#,
        ))
        .unwrap();

        let builder = ParagraphBuilder::new()
            .align(Alignment::Justify)
            .run("new text", RunFormat::new("Times New Roman", 14.0));
        doc.paragraphs_mut().next().unwrap().replace(&builder);

        let para = doc.paragraphs().next().unwrap();
        assert_eq!(para.text(), "new text");
        assert_eq!(para.style_id(), Some("ListParagraph"));
        assert!(para.xml().contains(r#"<w:pStyle w:val="ListParagraph"/>"#));
        assert!(!doc.to_xml().contains("old"));
    }

    #[test]
    fn test_has_paragraph_matches_trimmed_text() {
        let doc = Document::from_archive(archive_with(
            r#"<w:p><w:r><w:t xml:space="preserve"> ПЕРЕЛІК ПОСИЛАНЬ </w:t></w:r></w:p>"#,
        ))
        .unwrap();
        assert!(doc.has_paragraph("ПЕРЕЛІК ПОСИЛАНЬ"));
        assert!(!doc.has_paragraph("ВСТУП"));
    }

    #[test]
    fn test_new_document_is_blank() {
        let doc = Document::new("Times New Roman", 14.0).unwrap();
        assert_eq!(doc.blocks().len(), 0);
        assert!(doc.to_xml().contains("<w:sectPr>"));
    }
}
