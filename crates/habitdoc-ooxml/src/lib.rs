//! # habitdoc-ooxml
//!
//! Just enough OOXML to edit a coursework report in place.
//!
//! This crate provides functionality to:
//! - Open a DOCX package and split its body into paragraphs
//! - Rewrite paragraph text while leaving everything else untouched
//! - Append directly formatted paragraphs, page breaks and code blocks
//! - Create a blank package when a report is generated from scratch
//!
//! ## Example
//!
//! ```no_run
//! use habitdoc_ooxml::{Alignment, Document, ParagraphBuilder, RunFormat};
//!
//! let mut doc = Document::open("report.docx")?;
//! for para in doc.paragraphs() {
//!     println!("{}", para.text());
//! }
//! doc.append(
//!     &ParagraphBuilder::new()
//!         .align(Alignment::Center)
//!         .run("ВИСНОВКИ", RunFormat::new("Times New Roman", 16.0).bold()),
//! );
//! doc.save("report.docx")?;
//! # Ok::<(), habitdoc_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod template;
pub mod writer;

pub use archive::OoxmlArchive;
pub use document::{Block, Document, Paragraph};
pub use error::{OoxmlError, Result};
pub use writer::{Alignment, LineSpacing, ParagraphBuilder, ParagraphFormat, Run, RunFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
