//! Blocking HTTP fetch utilities for the Magpie pipeline.
//!
//! Provides simple GET wrappers used by the page provider, the external
//! stylesheet fetcher, and the logo downloader. Every request carries a
//! desktop-browser User-Agent and a caller-supplied timeout so the pipeline
//! can budget the page fetch and per-source fetches differently.

use base64::Engine;
use std::time::Duration;
use thiserror::Error;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Error produced by the fetch helpers in this module.
///
/// Timeouts and HTTP status codes are kept distinct from generic transport
/// failures so callers can map them onto their own failure taxonomy (the
/// pipeline distinguishes 404/403 from other statuses).
#[derive(Debug, Error)]
pub enum NetError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),
    /// The request failed before a response was received.
    #[error("request failed: {0}")]
    Request(String),
    /// The request exceeded its timeout.
    #[error("request timed out")]
    Timeout,
    /// The server answered with a non-success status.
    #[error("HTTP error: {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },
    /// The response body could not be read or decoded.
    #[error("failed to read response body: {0}")]
    Body(String),
    /// A `data:` URL could not be decoded.
    #[error("invalid data URL: {0}")]
    DataUrl(String),
}

fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, NetError> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| NetError::Client(e.to_string()))
}

fn send_get(url: &str, timeout: Duration) -> Result<reqwest::blocking::Response, NetError> {
    let client = build_client(timeout)?;
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|e| {
            if e.is_timeout() {
                NetError::Timeout
            } else {
                NetError::Request(e.to_string())
            }
        })?;

    if !response.status().is_success() {
        return Err(NetError::Status {
            status: response.status().as_u16(),
        });
    }
    Ok(response)
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns a [`NetError`] if the HTTP client cannot be created, the request
/// fails or times out, the response has a non-success status, or the body
/// cannot be decoded.
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String, NetError> {
    let response = send_get(url, timeout)?;
    response.text().map_err(|e| {
        if e.is_timeout() {
            NetError::Timeout
        } else {
            NetError::Body(e.to_string())
        }
    })
}

/// Fetch a URL and return its body as raw bytes.
///
/// Used for logo assets, where the payload is written to disk unmodified.
///
/// # Errors
///
/// Returns a [`NetError`] if the HTTP client cannot be created, the request
/// fails or times out, the response has a non-success status, or the body
/// cannot be read.
pub fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, NetError> {
    if url.starts_with("data:") {
        return decode_data_url(url);
    }
    let response = send_get(url, timeout)?;
    response.bytes().map(|b| b.to_vec()).map_err(|e| {
        if e.is_timeout() {
            NetError::Timeout
        } else {
            NetError::Body(e.to_string())
        }
    })
}

/// Decode a base64 `data:` URL payload into raw bytes.
///
/// Inline logos are sometimes embedded as `data:image/png;base64,...` URLs;
/// those never touch the network.
///
/// # Errors
///
/// Returns [`NetError::DataUrl`] if the URL is not a base64 data URL or the
/// payload fails to decode.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, NetError> {
    let data_url = url
        .strip_prefix("data:")
        .ok_or_else(|| NetError::DataUrl("missing data: prefix".to_string()))?;
    let (metadata, data) = match data_url.find(',') {
        Some(i) => (&data_url[..i], &data_url[i + 1..]),
        None => return Err(NetError::DataUrl("missing comma".to_string())),
    };

    if metadata.ends_with(";base64") {
        base64::engine::general_purpose::STANDARD
            .decode(data)
            .map_err(|e| NetError::DataUrl(format!("base64 decode error: {e}")))
    } else {
        Err(NetError::DataUrl(format!(
            "unsupported encoding: {metadata}"
        )))
    }
}
