//! Configuration
//!
//! Settings are loaded from `habitdoc.toml` (or the file passed with
//! `--config`):
//!
//! ```toml
//! [document]
//! path = "Курсова_Робота_HabitTracker.docx"
//!
//! [typography]
//! font = "Times New Roman"
//! size = 14.0
//!
//! [citations]
//! min_paragraph_len = 50
//!
//! [[citations.references]]
//! key = "mongodb"
//! id = 1
//! text = "MongoDB Documentation. MongoDB, Inc., 2024."
//!
//! [[citations.technologies]]
//! phrase = "MongoDB"
//! topics = ["mongodb"]
//!
//! [diagrams]
//! output_dir = "diagrams"
//! scale = 2.0
//! ```

mod settings;


pub use settings::{
    CitationSettings, DiagramSettings, DocumentSettings, PhraseSetting, ReferenceSetting,
    Settings, SettingsError, DEFAULT_CONFIG_FILE, DEFAULT_DOCUMENT,
};
