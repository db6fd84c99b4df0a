//! Report building and rendering for the Magpie brand extractor.
//!
//! # Scope
//!
//! This crate turns an [`magpie_style::ExtractionResult`] into two
//! independent artifacts and writes them to disk:
//! - **Document artifact** - the human-readable style guide (title, URL,
//!   timestamp, primary-font table, primary/secondary color tables with
//!   swatches), rendered as a single-page PDF
//! - **Data artifact** - the machine-readable summary (full and top-5 font
//!   and color lists, theme, source ids), rendered as pretty JSON
//!
//! Output files follow the `brand_report_<YYYYMMDD_HHMMSS>.<ext>` pattern
//! inside a caller-specified directory. A malformed color token degrades to
//! a placeholder swatch row; it never aborts rendering.

/// Artifact assembly from an extraction result.
pub mod builder;
/// The machine-readable data artifact.
pub mod data;
/// The human-readable document artifact.
pub mod document;
/// JSON serialization of the data artifact.
pub mod json;
/// Minimal single-page PDF serialization of the document artifact.
pub mod pdf;
/// The renderer seam and the default file-writing renderer.
pub mod renderer;

// Re-exports for convenience
pub use builder::{build_artifacts, build_data, build_document};
pub use data::{DataArtifact, UsageSummary};
pub use document::{ColorRow, DocumentArtifact, FontRow, Swatch};
pub use renderer::{FileRenderer, RenderError, ReportPaths, ReportRenderer};
