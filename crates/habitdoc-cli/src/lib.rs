//! habitdoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for habitdoc:
//! - Generate: create the report skeleton
//! - Expand: append code listings or the requirements chapters
//! - Cite: add citation markers and the reference list
//! - Diagrams: render the report figures as PNG
//!
//! # Library Usage
//!
//! ```ignore
//! use habitdoc_cli::run_from;
//!
//! run_from(["habitdoc", "--document", "report.docx", "cite"])?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! habitdoc generate
//! habitdoc expand requirements
//! habitdoc expand code
//! habitdoc cite
//! habitdoc diagrams --output diagrams/
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{cite_command, diagrams_command, expand_command, generate_command};
pub use app::{run_cli, run_from, Cli, ExpandPart};
