//! Style-signal extraction and frequency analysis for the Magpie brand extractor.
//!
//! # Scope
//!
//! This crate implements the core analysis engine:
//! - **Style Sources** - an ordered collection of raw CSS texts gathered from
//!   one page (inline blocks, external sheets, inline attributes, synthesized
//!   computed styles)
//! - **Pattern Matcher** - regex scanning for custom-property definitions,
//!   `font-family` declarations, and hex/rgb/rgba color literals
//! - **Variable Resolver** - `var(--x)` substitution for font tokens using
//!   `:root` declarations
//!   ([CSS Custom Properties Level 1](https://www.w3.org/TR/css-variables-1/))
//! - **Normalization** - canonical lowercase 6-digit hex colors
//!   ([CSS Color Level 4 § 4.2](https://www.w3.org/TR/css-color-4/#hex-notation))
//!   and quote-stripped font names with generic keywords excluded
//! - **Frequency Aggregation** - per-token counts with first-insertion
//!   tie-breaking and top-N queries
//! - **Theme Summary** - the reduced primary-colors/fonts/palette view
//!
//! # Design
//!
//! Scanning is deliberately regex-based rather than a real CSS parser: it is
//! tolerant of malformed CSS but blind to nesting, cascade, and selector
//! scoping. The pattern families are applied independently over the same text
//! and may overlap. A stricter parser could replace the scanning layer without
//! changing any other component's contract.
//!
//! # Not Implemented
//!
//! - Selector matching, specificity, or cascade resolution
//! - Named colors, `hsl()`, or non-RGB color spaces
//! - Variable substitution for colors (only fonts resolve `var()`)

/// Orchestration of the two-pass scan over all style sources.
pub mod analyzer;
/// Color token normalization per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Font token normalization and generic-keyword exclusion.
pub mod font;
/// Frequency tables with stable top-N queries.
pub mod frequency;
/// The terminal extraction result consumed by the report builder.
pub mod result;
/// Regex pattern families for scanning raw CSS text.
pub mod scan;
/// Ordered style-source collection.
pub mod source;
/// Theme summarization from final aggregator state.
pub mod theme;
/// CSS custom-property (`var()`) resolution for font tokens.
pub mod variables;

// Re-exports for convenience
pub use analyzer::{StyleAnalysis, analyze};
pub use color::ColorToken;
pub use font::{FontToken, GENERIC_FONT_KEYWORDS, is_generic_keyword};
pub use frequency::FrequencyTable;
pub use result::ExtractionResult;
pub use source::{StyleSource, StyleSourceSet};
pub use theme::ThemeSummary;
pub use variables::CssVariables;
