//! Extraction pipeline for the Magpie brand extractor.
//!
//! # Scope
//!
//! This crate wires one extraction run end to end:
//! - **Page Content Provider** - the seam behind which page rendering lives;
//!   the shipped implementation fetches the served HTML over HTTP (a
//!   headless-browser provider would additionally supply computed styles)
//! - **CSS Source Collector** - inline `<style>` blocks, external
//!   stylesheets (fetched individually, failures skipped), inline `style=`
//!   attributes, and computed-style synthesis
//! - **Logo Discovery** - best-effort asset fetch (img alt, icon link,
//!   og:image), collect-or-skip
//! - **Retry & Deadline** - an explicit retry state machine around the page
//!   fetch and a wall-clock budget over the whole fetch-and-prepare step
//! - **Orchestration** - `BrandExtractor::extract` producing the
//!   [`magpie_style::ExtractionResult`], and `run_report` adding report
//!   rendering
//!
//! # Failure policy
//!
//! A failure that affects a single source (one stylesheet, the logo) is
//! logged through `magpie_common::warning` and absorbed; the run continues
//! without that source. A failure that makes the run meaningless (page
//! unreachable, empty content, overall timeout, unwritable report) aborts
//! with a single terminal [`ExtractError`].

/// CSS source collection from a rendered page.
pub mod collector;
/// Wall-clock budget for the fetch-and-prepare step.
pub mod deadline;
/// The failure taxonomy.
pub mod error;
/// Extraction orchestration.
pub mod extract;
/// Best-effort logo discovery and download.
pub mod logo;
/// The page-content provider seam.
pub mod provider;
/// Explicit retry state machine.
pub mod retry;

// Re-exports for convenience
pub use collector::{HttpStylesheetFetcher, StylesheetFetcher, collect_sources};
pub use deadline::Deadline;
pub use error::{ExtractError, FetchError};
pub use extract::{BrandExtractor, ExtractOptions};
pub use logo::LogoOutcome;
pub use provider::{ComputedStyleEntry, HttpPageProvider, PageContentProvider, RenderedPage};
pub use retry::{Retry, RetryPolicy, RetryState};
