//! Common utilities for the Magpie brand extractor.
//!
//! This crate provides shared infrastructure used by the extraction pipeline:
//! - **HTTP fetch** - blocking GET helpers with per-request timeouts
//! - **URL resolution** - resolving stylesheet and logo URLs against the page URL
//! - **Warning system** - deduplicated colored terminal output for skipped sources

/// Blocking HTTP fetch helpers with per-request timeouts.
pub mod net;
/// Relative URL resolution against the analyzed page's URL.
pub mod url;
/// Deduplicated colored warnings for skipped sources.
pub mod warning;
