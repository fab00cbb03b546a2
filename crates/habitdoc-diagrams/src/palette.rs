//! Fixed diagram colours

pub const BG: &str = "#FFFFFF";
/// Blue
pub const PRIMARY: &str = "#3B82F6";
/// Green
pub const SECONDARY: &str = "#10B981";
/// Orange
pub const ACCENT: &str = "#F59E0B";
/// Dark grey
pub const TEXT: &str = "#1F2937";
/// Grey
pub const BORDER: &str = "#6B7280";
/// Light grey
pub const LIGHT: &str = "#E5E7EB";
pub const PINK: &str = "#EC4899";
pub const RED: &str = "#DC2626";

pub const WHITE: &str = "white";
pub const BLACK: &str = "black";

// Tinted fills behind coloured outlines
pub const SKY: &str = "#E0F2FE";
pub const AMBER: &str = "#FEF3C7";
pub const MINT: &str = "#D1FAE5";
pub const ROSE: &str = "#FCE7F3";
pub const ICE: &str = "#F0F9FF";
pub const SNOW: &str = "#F9FAFB";
