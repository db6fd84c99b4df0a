//! The human-readable document artifact.
//!
//! A flat, renderer-agnostic description of the style guide: header fields
//! plus table rows. The PDF writer consumes this; a different renderer
//! could consume the same structure without touching the builder.

use serde::Serialize;
use std::path::PathBuf;

/// One row of the "Primary Fonts" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontRow {
    /// The font name.
    pub name: String,
    /// How many times the font was counted across all sources.
    pub count: usize,
}

/// The visual swatch of a color row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Swatch {
    /// Unit-interval sRGB channels, each in `[0, 1]`.
    Rgb {
        /// Red channel.
        r: f32,
        /// Green channel.
        g: f32,
        /// Blue channel.
        b: f32,
    },
    /// Placeholder for a token that failed hex validation (wrong length,
    /// non-hex digits). The row is still emitted so the malformed value
    /// stays visible.
    Invalid,
}

/// One row of a color table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorRow {
    /// The swatch to draw next to the value.
    pub swatch: Swatch,
    /// The token text as aggregated (normally `#rrggbb`).
    pub hex: String,
    /// How many times the color was counted across all sources.
    pub count: usize,
}

/// The assembled style guide document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentArtifact {
    /// Report title.
    pub title: String,
    /// The analyzed page URL.
    pub url: String,
    /// Generation time, already formatted for display.
    pub generated_at: String,
    /// Saved logo asset, when discovery succeeded.
    pub logo_path: Option<PathBuf>,
    /// Top-3 fonts by usage.
    pub font_rows: Vec<FontRow>,
    /// Top-3 colors by usage.
    pub primary_colors: Vec<ColorRow>,
    /// Colors ranked 4-6; empty when three or fewer colors exist, and the
    /// section is omitted from the rendered report in that case.
    pub secondary_colors: Vec<ColorRow>,
}
