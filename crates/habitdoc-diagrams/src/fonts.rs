//! Label fonts
//!
//! Diagrams are drawn with a configured regular/bold font pair. When a file
//! is missing the system fonts are used instead and every diagram rendered
//! with this set is reported as degraded.

use std::path::Path;
use std::sync::Arc;

use usvg::fontdb::Database;

/// Generic family used when no face is known
const GENERIC_FAMILY: &str = "sans-serif";

/// Where the label fonts came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStatus {
    /// Both configured files loaded
    Configured,
    /// At least one configured file was missing; system fonts are used
    Fallback,
    /// No font at all; labels will not be drawn
    Missing,
}

/// Font database shared by every render
#[derive(Debug, Clone)]
pub struct FontSet {
    db: Arc<Database>,
    family: String,
    status: FontStatus,
}

impl FontSet {
    /// Load the regular and bold font files, falling back to system fonts
    pub fn load(regular: &Path, bold: &Path) -> Self {
        let mut db = Database::new();
        let mut missing = false;

        for path in [regular, bold] {
            let before = db.len();
            match db.load_font_file(path) {
                Ok(()) if db.len() > before => {}
                Ok(()) => {
                    log::warn!("No usable font face in {}", path.display());
                    missing = true;
                }
                Err(e) => {
                    log::warn!("Font {} not available: {}", path.display(), e);
                    missing = true;
                }
            }
        }

        // Family of the configured regular face, before system fonts are mixed in
        let configured_family = first_family(&db, |_| true);

        if missing {
            log::warn!("Falling back to system fonts; diagrams will be marked degraded");
            db.load_system_fonts();
        }

        if db.is_empty() {
            log::warn!("No fonts found, diagram labels will be missing");
            return Self {
                db: Arc::new(db),
                family: GENERIC_FAMILY.to_string(),
                status: FontStatus::Missing,
            };
        }

        let family = configured_family
            .or_else(|| first_family(&db, |name| name.contains("Sans")))
            .or_else(|| first_family(&db, |_| true))
            .unwrap_or_else(|| GENERIC_FAMILY.to_string());

        let status = if missing {
            FontStatus::Fallback
        } else {
            FontStatus::Configured
        };
        log::debug!("Diagram labels use '{}' ({:?})", family, status);

        Self {
            db: Arc::new(db),
            family,
            status,
        }
    }

    /// System fonts only
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        if db.is_empty() {
            log::warn!("No system fonts found, diagram labels will be missing");
        }
        let family = first_family(&db, |name| name.contains("Sans"))
            .or_else(|| first_family(&db, |_| true));
        let status = if family.is_some() {
            FontStatus::Fallback
        } else {
            FontStatus::Missing
        };

        Self {
            db: Arc::new(db),
            family: family.unwrap_or_else(|| GENERIC_FAMILY.to_string()),
            status,
        }
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.db)
    }

    /// Family name written into every label
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn status(&self) -> FontStatus {
        self.status
    }

    /// True when the configured fonts were not used
    pub fn is_degraded(&self) -> bool {
        self.status != FontStatus::Configured
    }
}

fn first_family(db: &Database, accept: impl Fn(&str) -> bool) -> Option<String> {
    db.faces()
        .filter_map(|face| face.families.first().map(|(name, _)| name))
        .find(|name| accept(name))
        .cloned()
}
