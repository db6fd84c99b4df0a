//! The machine-readable data artifact.

use magpie_style::{ColorToken, FontToken, ThemeSummary};
use serde::Serialize;

/// Full membership plus the top-5 slice for one token kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageSummary<T> {
    /// Every distinct token, in first-encountered order.
    pub all: Vec<T>,
    /// The five most-used tokens.
    pub top_used: Vec<T>,
}

/// The JSON-rendered summary of one extraction run.
///
/// Carries source ids only - source text is not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataArtifact {
    /// The analyzed page URL.
    pub url: String,
    /// Font membership and top usage.
    pub fonts: UsageSummary<FontToken>,
    /// Color membership and top usage.
    pub colors: UsageSummary<ColorToken>,
    /// The derived theme summary.
    pub themes: ThemeSummary,
    /// Ids of the collected style sources, in collection order.
    pub stylesheets: Vec<String>,
}
