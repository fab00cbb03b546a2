//! Configuration settings
//!
//! Every section is optional; a missing file or an empty section
//! reproduces the built-in Habit Tracker report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::citations::{
    builtin, builtin_references, CitationConfig, CitationMap, CiteError, ReferenceEntry,
    ReferenceTable, DEFAULT_MIN_PARAGRAPH_LEN,
};
use crate::typography::Typography;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "habitdoc.toml";

/// Default report file name
pub const DEFAULT_DOCUMENT: &str = "Курсова_Робота_HabitTracker.docx";

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid citation settings: {0}")]
    Citations(#[from] CiteError),
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub document: DocumentSettings,
    pub typography: Typography,
    pub citations: CitationSettings,
    pub diagrams: DiagramSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings
    ///
    /// An explicit path must exist. Without one, `habitdoc.toml` in the
    /// working directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("No {} found, using built-in settings", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a settings file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Which report file the document commands edit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentSettings {
    pub path: PathBuf,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DOCUMENT),
        }
    }
}

/// A reference entry supplied in the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceSetting {
    /// Topic label that phrase rules refer to
    pub key: String,
    pub id: u32,
    pub text: String,
}

/// A phrase rule supplied in the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhraseSetting {
    pub phrase: String,
    /// Reference topics cited after the phrase, in marker order
    pub topics: Vec<String>,
}

/// Citation settings; empty lists fall back to the built-in tables
///
/// With custom references, an empty rule list means no rules of that kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CitationSettings {
    pub min_paragraph_len: usize,
    pub references: Vec<ReferenceSetting>,
    pub technologies: Vec<PhraseSetting>,
    pub patterns: Vec<PhraseSetting>,
}

impl Default for CitationSettings {
    fn default() -> Self {
        Self {
            min_paragraph_len: DEFAULT_MIN_PARAGRAPH_LEN,
            references: Vec::new(),
            technologies: Vec::new(),
            patterns: Vec::new(),
        }
    }
}

impl CitationSettings {
    /// Build the immutable citation tables
    pub fn to_config(&self) -> Result<CitationConfig, CiteError> {
        let references = if self.references.is_empty() {
            builtin_references()?
        } else {
            ReferenceTable::new(
                self.references
                    .iter()
                    .map(|r| (r.key.clone(), ReferenceEntry::new(r.id, r.text.clone()))),
            )?
        };

        // Built-in rules name built-in topics, so they only apply to the
        // built-in reference table
        let custom = !self.references.is_empty();
        let technologies = phrase_map(
            &references,
            &self.technologies,
            builtin::TECHNOLOGY_RULES,
            custom,
        )?;
        let patterns = phrase_map(&references, &self.patterns, builtin::PATTERN_RULES, custom)?;

        Ok(CitationConfig {
            references,
            technologies,
            patterns,
            min_paragraph_len: self.min_paragraph_len,
        })
    }
}

fn phrase_map(
    references: &ReferenceTable,
    configured: &[PhraseSetting],
    fallback: &[(&str, &[&str])],
    custom_references: bool,
) -> Result<CitationMap, CiteError> {
    if configured.is_empty() && custom_references {
        Ok(CitationMap::default())
    } else if configured.is_empty() {
        CitationMap::from_rules(references, fallback.iter().copied())
    } else {
        CitationMap::from_rules(
            references,
            configured
                .iter()
                .map(|rule| (rule.phrase.as_str(), rule.topics.as_slice())),
        )
    }
}

/// Diagram output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagramSettings {
    /// Directory the PNG files are written to
    pub output_dir: PathBuf,
    /// Regular label font file
    pub font_regular: PathBuf,
    /// Bold label font file
    pub font_bold: PathBuf,
    /// Pixel scale factor applied when rasterizing
    pub scale: f32,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("diagrams"),
            font_regular: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            font_bold: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            scale: 1.0,
        }
    }
}
