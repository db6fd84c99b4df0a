//! Theme summarization from final aggregator state.

use crate::analyzer::StyleAnalysis;
use crate::color::ColorToken;
use crate::font::FontToken;
use serde::Serialize;

/// The reduced "brand theme" view: primary colors, primary fonts, and the
/// full color palette.
///
/// A snapshot, not independently mutable - recomputed wholesale each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSummary {
    /// The three most-used colors.
    pub primary_colors: Vec<ColorToken>,
    /// The three most-used fonts.
    pub fonts: Vec<FontToken>,
    /// Every distinct color encountered, in first-encountered order.
    pub color_scheme: Vec<ColorToken>,
}

/// Derive the theme from the aggregator's final state.
///
/// Pure and idempotent: repeated calls on unchanged state yield identical
/// summaries.
#[must_use]
pub fn summarize(analysis: &StyleAnalysis) -> ThemeSummary {
    ThemeSummary {
        primary_colors: analysis.top_colors(3),
        fonts: analysis.top_fonts(3),
        color_scheme: analysis.colors.members().cloned().collect(),
    }
}
