//! Extraction orchestration.
//!
//! One call runs the whole pipeline: fetch the page (with retry and a
//! wall-clock budget), collect style sources, best-effort logo discovery,
//! two-pass analysis, theme summarization, and - through [`run_report`] -
//! report rendering. All state is created fresh per run and discarded after
//! the report files are written.
//!
//! [`run_report`]: BrandExtractor::run_report

use crate::collector::{self, StylesheetFetcher};
use crate::deadline::Deadline;
use crate::error::{ExtractError, FetchError};
use crate::logo::{self, LogoOutcome};
use crate::provider::PageContentProvider;
use crate::retry::{Retry, RetryPolicy};
use magpie_common::warning;
use magpie_report::{ReportPaths, ReportRenderer, build_artifacts};
use magpie_style::{ExtractionResult, analyze, theme};
use std::path::PathBuf;
use std::time::Duration;

/// Per-run configuration.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Where report files and the logo asset are written.
    pub output_dir: PathBuf,
    /// Wall-clock budget for the whole fetch-and-prepare step.
    pub page_timeout: Duration,
    /// Per-request timeout for each external stylesheet and the logo.
    pub stylesheet_timeout: Duration,
    /// Retry policy around the page fetch.
    pub retry: RetryPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            page_timeout: Duration::from_secs(60),
            stylesheet_timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }
}

/// The pipeline driver for one page.
pub struct BrandExtractor<'a> {
    provider: &'a dyn PageContentProvider,
    fetcher: &'a dyn StylesheetFetcher,
    options: ExtractOptions,
}

impl<'a> BrandExtractor<'a> {
    /// Wire a driver from its collaborators.
    pub fn new(
        provider: &'a dyn PageContentProvider,
        fetcher: &'a dyn StylesheetFetcher,
        options: ExtractOptions,
    ) -> Self {
        Self {
            provider,
            fetcher,
            options,
        }
    }

    /// Run the fetch-and-analyze pipeline for `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the page itself cannot be fetched
    /// within the retry policy and time budget. Per-source failures are
    /// absorbed as warnings.
    pub fn extract(&self, url: &str) -> Result<ExtractionResult, FetchError> {
        warning::clear_warnings();
        let deadline = Deadline::new(self.options.page_timeout);

        let mut retry = Retry::new(self.options.retry);
        let page = retry.run(|_attempt| {
            let timeout = deadline
                .clamp(self.options.page_timeout)
                .ok_or(FetchError::Timeout)?;
            self.provider.fetch(url, timeout)
        })?;

        let sources = collector::collect_sources(
            &page,
            url,
            self.fetcher,
            self.options.stylesheet_timeout,
            &deadline,
        );

        let logo_path = match logo::discover_logo(
            &page.html,
            url,
            &self.options.output_dir,
            self.options.stylesheet_timeout,
        ) {
            LogoOutcome::Saved(path) => Some(path),
            LogoOutcome::Skipped(_) | LogoOutcome::NotFound => None,
        };

        let analysis = analyze(&sources);
        let summary = theme::summarize(&analysis);
        Ok(ExtractionResult {
            url: url.to_string(),
            theme: summary,
            source_ids: sources.ids(),
            logo_path,
            analysis,
        })
    }

    /// Run the full pipeline and render both report files.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Fetch`] when the page cannot be fetched and
    /// [`ExtractError::Render`] when the report files cannot be produced.
    pub fn run_report(
        &self,
        url: &str,
        renderer: &dyn ReportRenderer,
    ) -> Result<(ExtractionResult, ReportPaths), ExtractError> {
        let result = self.extract(url)?;
        let (document, data) = build_artifacts(&result);
        let paths = renderer.render(&document, &data, &self.options.output_dir)?;
        Ok((result, paths))
    }
}
