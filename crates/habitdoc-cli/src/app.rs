//! CLI Application logic
//!
//! One subcommand per report job. Each opens (or creates) the report,
//! mutates it in memory and saves it once.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use habitdoc_core::citations::{has_bibliography, BIBLIOGRAPHY_HEADING};
use habitdoc_core::{
    annotate_document, append_bibliography, expand, generate, ReportPart, Settings,
};
use habitdoc_diagrams::{DiagramKind, DiagramRenderer, FontSet, RenderOptions};
use habitdoc_ooxml::Document;

/// Report part appended by `expand`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpandPart {
    /// Chapter 4 with backend and frontend listings
    Code,
    /// Requirements, user interface and data representation (3.4 to 3.6)
    Requirements,
}

impl From<ExpandPart> for ReportPart {
    fn from(part: ExpandPart) -> Self {
        match part {
            ExpandPart::Code => ReportPart::CodeListings,
            ExpandPart::Requirements => ReportPart::Requirements,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "habitdoc")]
#[command(author, version)]
#[command(about = "Habit Tracker coursework report tools", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./habitdoc.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report file, overriding the configured path
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the report with its front matter and first chapters
    Generate,

    /// Append a prepared part to an existing report
    Expand {
        #[arg(value_enum)]
        part: ExpandPart,
    },

    /// Add citation markers and the reference list
    Cite,

    /// Render the report diagrams as PNG files
    Diagrams {
        /// Output directory, overriding the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render only these diagrams (name, file stem or number)
        #[arg(long)]
        only: Vec<String>,
    },
}

/// Run the CLI application
///
/// Parses the process arguments and dispatches to the matching command.
pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

/// Run with explicit arguments (the first item is the program name)
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    run(Cli::try_parse_from(args)?)
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(document) = cli.document {
        settings.document.path = document;
    }

    match cli.command {
        Commands::Generate => generate_command(&settings),
        Commands::Expand { part } => expand_command(&settings, part.into()),
        Commands::Cite => cite_command(&settings),
        Commands::Diagrams { output, only } => {
            diagrams_command(&settings, output.as_deref(), &only)
        }
    }
}

fn open_report(path: &Path) -> Result<Document> {
    if !path.exists() {
        anyhow::bail!(
            "Report not found: {}\n\nRun 'habitdoc generate' first or pass --document <path>",
            path.display()
        );
    }
    Document::open(path).with_context(|| format!("Failed to open report: {}", path.display()))
}

fn save_report(doc: &Document, path: &Path) -> Result<()> {
    doc.save(path)
        .with_context(|| format!("Failed to save report: {}", path.display()))
}

/// Execute the generate command
pub fn generate_command(settings: &Settings) -> Result<()> {
    let path = &settings.document.path;
    println!("habitdoc v{}", habitdoc_core::VERSION);
    println!("Generating: {}", path.display());

    let doc = generate(&settings.typography).context("Failed to build the report")?;
    save_report(&doc, path)?;

    println!();
    println!("Document saved successfully: {}", path.display());
    println!("  {} paragraphs", doc.paragraph_count());
    Ok(())
}

/// Execute the expand command
pub fn expand_command(settings: &Settings, part: ReportPart) -> Result<()> {
    let path = &settings.document.path;
    println!("habitdoc v{}", habitdoc_core::VERSION);
    println!("Expanding: {}", path.display());

    let mut doc = open_report(path)?;
    let before = doc.paragraph_count();
    let blocks = expand(&mut doc, part, &settings.typography)
        .with_context(|| format!("Failed to append {}", part.file_name()))?;
    save_report(&doc, path)?;

    println!();
    println!("✅ Документ успішно розширено!");
    println!(
        "   {} blocks, {} new paragraphs",
        blocks,
        doc.paragraph_count() - before
    );
    Ok(())
}

/// Execute the cite command
pub fn cite_command(settings: &Settings) -> Result<()> {
    let path = &settings.document.path;
    let config = settings
        .citations
        .to_config()
        .context("Invalid citation settings")?;

    println!("Завантаження документу...");
    let mut doc = open_report(path)?;

    println!("Додавання посилань до тексту...");
    let report = annotate_document(&mut doc, &config, &settings.typography);
    for index in &report.rewritten {
        println!("  Додано посилання в параграф {}", index);
    }
    info!(
        "{} of {} long paragraphs annotated",
        report.rewritten.len(),
        report.examined
    );

    if has_bibliography(&doc) {
        warn!(
            "'{}' is already present, not appending another",
            BIBLIOGRAPHY_HEADING
        );
    } else {
        println!("\nДодавання розділу '{}'...", BIBLIOGRAPHY_HEADING);
        append_bibliography(&mut doc, &config.references, &settings.typography);
        println!(
            "\nДодано {} джерел до переліку посилань",
            config.references.len()
        );
    }

    println!("\nЗбереження документу...");
    save_report(&doc, path)?;

    println!("✅ Документ успішно оновлено!");
    println!("\n📄 Оновлений файл: {}", path.display());
    Ok(())
}

/// Execute the diagrams command
pub fn diagrams_command(
    settings: &Settings,
    output: Option<&Path>,
    only: &[String],
) -> Result<()> {
    let diagrams = &settings.diagrams;
    let output_dir = output.unwrap_or(diagrams.output_dir.as_path());

    let kinds = if only.is_empty() {
        DiagramKind::all().to_vec()
    } else {
        only.iter()
            .map(|name| name.parse::<DiagramKind>())
            .collect::<Result<Vec<_>, _>>()?
    };

    println!("Генерація діаграм для курсової роботи...\n");
    let fonts = FontSet::load(&diagrams.font_regular, &diagrams.font_bold);
    let renderer = DiagramRenderer::new(output_dir, fonts)
        .with_options(RenderOptions::new().with_scale(diagrams.scale));

    let mut degraded = 0;
    for kind in kinds.iter().copied() {
        let rendered = renderer
            .render(kind)
            .with_context(|| format!("Failed to render {}", kind.file_name()))?;
        println!("✅ {}: {}", kind.caption(), rendered.path.display());
        if rendered.degraded {
            degraded += 1;
        }
    }

    println!();
    println!(
        "✅ {} diagrams written to '{}'",
        kinds.len(),
        output_dir.display()
    );
    if degraded > 0 {
        println!(
            "⚠️  {} rendered with fallback fonts (configured fonts not found)",
            degraded
        );
    }
    Ok(())
}
