//! The failure taxonomy for one extraction run.

use magpie_common::net::NetError;
use magpie_report::RenderError;
use thiserror::Error;

/// Failure to fetch a resource.
///
/// Fatal when it hits the page itself; absorbed as a skip when it hits one
/// external stylesheet or the logo. 404 and 403 are distinguished from
/// other statuses so the caller can present them precisely.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The resource does not exist (HTTP 404).
    #[error("not found (HTTP 404)")]
    NotFound,
    /// Access was denied (HTTP 403).
    #[error("access forbidden (HTTP 403)")]
    Forbidden,
    /// Any other non-success HTTP status.
    #[error("HTTP error {0}")]
    Status(u16),
    /// The request failed before or while reading a response.
    #[error("network error: {0}")]
    Network(String),
    /// The page was fetched but contained nothing to analyze.
    #[error("page returned no content")]
    EmptyContent,
    /// The request or the overall run exceeded its time budget.
    #[error("timed out")]
    Timeout,
}

impl From<NetError> for FetchError {
    fn from(err: NetError) -> Self {
        match err {
            NetError::Timeout => Self::Timeout,
            NetError::Status { status: 404 } => Self::NotFound,
            NetError::Status { status: 403 } => Self::Forbidden,
            NetError::Status { status } => Self::Status(status),
            other => Self::Network(other.to_string()),
        }
    }
}

/// The single terminal failure surface of a run.
///
/// Stage-local failures never reach this type; whatever does ends the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The page could not be fetched, so there is nothing to analyze.
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] FetchError),
    /// The report files could not be produced.
    #[error("failed to render report: {0}")]
    Render(#[from] RenderError),
}
