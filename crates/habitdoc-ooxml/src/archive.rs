//! Archive handling for DOCX files
//!
//! A DOCX file is a ZIP archive of XML parts. The archive is unpacked
//! into memory on open and packed again on save; parts the report tools
//! never touch (styles, themes, settings) round-trip byte for byte.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use zip::read::ZipArchive;
use zip::write::ZipWriter;
use zip::CompressionMethod;

use crate::error::{OoxmlError, Result};

/// Path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Represents an unpacked OOXML package
#[derive(Debug, Clone, Default)]
pub struct OoxmlArchive {
    /// All files in the archive, keyed by path
    files: HashMap<String, Vec<u8>>,
}

impl OoxmlArchive {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and unpack a DOCX file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Unpack an archive held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(name, contents);
        }

        Ok(Self { files })
    }

    /// Get a file's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Get a file's contents as a UTF-8 string
    pub fn get_string(&self, path: &str) -> Result<Option<String>> {
        match self.files.get(path) {
            Some(bytes) => String::from_utf8(bytes.clone())
                .map(Some)
                .map_err(|source| OoxmlError::Utf8 {
                    part: path.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> Result<String> {
        self.get_string(DOCUMENT_PART)?
            .ok_or_else(|| OoxmlError::MissingFile(DOCUMENT_PART.to_string()))
    }

    /// Check if a file exists in the archive
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// List all files in the archive
    pub fn file_list(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_str())
    }

    /// Set or update a file's contents
    pub fn set(&mut self, path: impl Into<String>, contents: Vec<u8>) {
        self.files.insert(path.into(), contents);
    }

    /// Set a file's contents from a string
    pub fn set_string(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into().into_bytes());
    }

    /// Remove a file from the archive
    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }

    /// Pack the archive into an in-memory ZIP
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Write the archive to a file
    ///
    /// The package is packed in memory first so a failure never leaves
    /// a truncated file behind.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write the archive to any writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated);

        // Sorted for deterministic output. '[' sorts ahead of '_' and the
        // lowercase part folders, so [Content_Types].xml lands first.
        let mut paths: Vec<_> = self.files.keys().collect();
        paths.sort();

        for path in paths {
            let contents = &self.files[path];
            zip.start_file(path.as_str(), options)?;
            zip.write_all(contents)?;
        }

        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operations() {
        let mut archive = OoxmlArchive::new();

        archive.set_string("test.xml", "<root/>");
        assert!(archive.contains("test.xml"));
        assert_eq!(
            archive.get_string("test.xml").unwrap(),
            Some("<root/>".to_string())
        );

        archive.remove("test.xml");
        assert!(!archive.contains("test.xml"));
    }

    #[test]
    fn test_missing_document_part() {
        let archive = OoxmlArchive::new();
        let err = archive.document_xml().unwrap_err();
        assert!(matches!(err, OoxmlError::MissingFile(ref p) if p == DOCUMENT_PART));
    }

    #[test]
    fn test_invalid_utf8_is_reported_with_part_name() {
        let mut archive = OoxmlArchive::new();
        archive.set("word/document.xml", vec![0xff, 0xfe, 0x00]);
        let err = archive.document_xml().unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }

    #[test]
    fn test_roundtrip_through_bytes() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", "<Types/>");
        archive.set_string("word/document.xml", "<w:document/>");
        archive.set("word/media/image1.png", vec![0x89, b'P', b'N', b'G']);

        let bytes = archive.to_bytes().unwrap();
        let restored = OoxmlArchive::from_bytes(&bytes).unwrap();

        let mut names: Vec<_> = restored.file_list().collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "word/document.xml",
                "word/media/image1.png",
            ]
        );
        assert_eq!(
            restored.get("word/media/image1.png"),
            Some(&[0x89, b'P', b'N', b'G'][..])
        );
    }

    #[test]
    fn test_content_types_written_first() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("_rels/.rels", "<Relationships/>");
        archive.set_string("[Content_Types].xml", "<Types/>");

        let bytes = archive.to_bytes().unwrap();
        let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.by_index(0).unwrap().name(), "[Content_Types].xml");
    }

    #[test]
    fn test_write_to_file_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.docx");
        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", "<Types/>");
        archive.set_string("word/document.xml", "<w:document/>");

        archive.write_to_file(&path).unwrap();
        let reopened = OoxmlArchive::open(&path).unwrap();
        assert_eq!(reopened.document_xml().unwrap(), "<w:document/>");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let archive = OoxmlArchive::new();
        let err = archive
            .write_to_file(dir.path().join("no/such/dir/out.docx"))
            .unwrap_err();
        assert!(matches!(err, OoxmlError::Io(_)));
    }

    #[test]
    fn test_open_nonexistent_file_is_io_error() {
        let err = OoxmlArchive::open("/definitely/not/here.docx").unwrap_err();
        assert!(matches!(err, OoxmlError::Io(_)));
    }
}
