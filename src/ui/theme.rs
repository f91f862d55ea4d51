//! Color theme constants for the browser UI
//!
//! Minimal dark palette; color is reserved for file kinds and status.

use ratatui::style::Color;

use crate::app::StatusKind;
use crate::models::FileKind;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row background
pub const COLOR_SELECTION_BG: Color = Color::Rgb(40, 44, 60);

/// Background for dialog boxes (preview, delete confirmation)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Folder and subfolder glyphs
pub const COLOR_FOLDER: Color = Color::Rgb(229, 192, 123);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_INFO: Color = Color::Rgb(4, 181, 117); // green #04B575
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// File Kind Colors
// ============================================================================

pub const COLOR_PDF: Color = Color::Rgb(224, 108, 117);
pub const COLOR_AUDIO: Color = Color::Rgb(97, 175, 239);
pub const COLOR_VIDEO: Color = Color::Rgb(198, 120, 221);
pub const COLOR_IMAGE: Color = Color::Rgb(152, 195, 121);
pub const COLOR_DOCUMENT: Color = Color::Rgb(86, 182, 194);

/// Accent color for a file kind.
pub fn kind_color(kind: FileKind) -> Color {
    match kind {
        FileKind::Pdf => COLOR_PDF,
        FileKind::Audio => COLOR_AUDIO,
        FileKind::Video => COLOR_VIDEO,
        FileKind::Image => COLOR_IMAGE,
        FileKind::Document => COLOR_DOCUMENT,
        FileKind::Other => Color::Gray,
    }
}

pub fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => COLOR_INFO,
        StatusKind::Warning => COLOR_WARNING,
        StatusKind::Error => COLOR_ERROR,
    }
}
