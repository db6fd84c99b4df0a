//! The terminal extraction result.
//!
//! Created fresh per run and immutable once produced; the report builder
//! reads it to assemble the document and data artifacts. Nothing here is
//! persisted across runs.

use crate::analyzer::StyleAnalysis;
use crate::color::ColorToken;
use crate::font::FontToken;
use crate::theme::ThemeSummary;
use std::path::PathBuf;

/// Everything one extraction run produced.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The analyzed page URL.
    pub url: String,
    /// Final aggregator state (frequency tables and variables).
    pub analysis: StyleAnalysis,
    /// The derived theme summary.
    pub theme: ThemeSummary,
    /// Ids of the collected style sources, in collection order. Source
    /// text is not carried into the artifacts.
    pub source_ids: Vec<String>,
    /// Path of the saved logo asset, when one was found.
    pub logo_path: Option<PathBuf>,
}

impl ExtractionResult {
    /// Every distinct font, in first-encountered order.
    #[must_use]
    pub fn all_fonts(&self) -> Vec<FontToken> {
        self.analysis.fonts.members().cloned().collect()
    }

    /// Every distinct color, in first-encountered order.
    #[must_use]
    pub fn all_colors(&self) -> Vec<ColorToken> {
        self.analysis.colors.members().cloned().collect()
    }

    /// The `n` most-used fonts.
    #[must_use]
    pub fn top_fonts(&self, n: usize) -> Vec<FontToken> {
        self.analysis.top_fonts(n)
    }

    /// The `n` most-used colors.
    #[must_use]
    pub fn top_colors(&self, n: usize) -> Vec<ColorToken> {
        self.analysis.top_colors(n)
    }
}
