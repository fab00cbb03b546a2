//! Blank DOCX package
//!
//! Used when a report is generated from scratch. The package carries a
//! Normal style in the body font plus Title and Heading1..Heading3, which
//! is the minimum Word needs to open the file and build a navigation pane.

use crate::archive::{OoxmlArchive, DOCUMENT_PART};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Default Extension="png" ContentType="image/png"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// A4 page, 2cm/1.5cm/1cm/3cm margins (the usual coursework layout)
const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body><w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1134" w:right="567" w:bottom="1134" w:left="1701" w:header="709" w:footer="709" w:gutter="0"/></w:sectPr></w:body></w:document>"#;

/// Build the `word/styles.xml` part for the given body font
pub fn styles_xml(font: &str, size_pt: f32) -> String {
    let font = crate::writer::escape_xml(font);
    let sz = (size_pt * 2.0).round() as u32;
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );
    xml.push_str(&format!(
        r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/><w:sz w:val="{sz}"/><w:szCs w:val="{sz}"/><w:lang w:val="uk-UA"/></w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>"#
    ));
    xml.push_str(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    );
    xml.push_str(
        r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:jc w:val="center"/></w:pPr><w:rPr><w:b/><w:sz w:val="32"/></w:rPr></w:style>"#,
    );
    for level in 1..=3u8 {
        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="Heading{level}"><w:name w:val="heading {level}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="{outline}"/></w:pPr><w:rPr><w:b/></w:rPr></w:style>"#,
            outline = level - 1
        ));
    }
    xml.push_str("</w:styles>");
    xml
}

/// Build a blank package in the given body font
pub fn blank_package(font: &str, size_pt: f32) -> OoxmlArchive {
    let mut archive = OoxmlArchive::new();
    archive.set_string("[Content_Types].xml", CONTENT_TYPES);
    archive.set_string("_rels/.rels", PACKAGE_RELS);
    archive.set_string("word/_rels/document.xml.rels", DOCUMENT_RELS);
    archive.set_string(DOCUMENT_PART, DOCUMENT);
    archive.set_string("word/styles.xml", styles_xml(font, size_pt));
    archive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_package_parts() {
        let archive = blank_package("Times New Roman", 14.0);
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/styles.xml",
        ] {
            assert!(archive.contains(part), "missing {part}");
        }
    }

    #[test]
    fn test_styles_use_body_font() {
        let xml = styles_xml("Times New Roman", 14.0);
        assert!(xml.contains(r#"w:ascii="Times New Roman""#));
        assert!(xml.contains(r#"<w:sz w:val="28"/>"#));
        assert!(xml.contains(r#"w:styleId="Heading1""#));
        assert!(xml.contains(r#"w:styleId="Heading3""#));
        assert!(xml.contains(r#"<w:outlineLvl w:val="2"/>"#));
    }

    #[test]
    fn test_styles_xml_is_well_formed() {
        let xml = styles_xml("A & B", 12.0);
        let mut reader = quick_xml::Reader::from_str(&xml);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("malformed styles.xml: {e}"),
            }
        }
    }
}
