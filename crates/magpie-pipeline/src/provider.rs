//! The page-content provider seam.
//!
//! Browser automation is an external collaborator: the pipeline only needs
//! "given a URL, return rendered HTML (plus whatever computed styles the
//! renderer can answer), or fail". The shipped [`HttpPageProvider`] fetches
//! the served HTML over HTTP and supplies no computed styles; a
//! headless-browser implementation of the same trait would query
//! [`COMPUTED_STYLE_PROPERTIES`] for [`COMPUTED_STYLE_SELECTORS`] and fill
//! [`RenderedPage::computed_styles`].

use crate::error::FetchError;
use magpie_common::net;
use std::time::Duration;

/// Representative selectors a browser-backed provider queries computed
/// styles for.
pub const COMPUTED_STYLE_SELECTORS: &str =
    "body, h1, h2, h3, p, a, button, .logo, .header, .footer, .nav, .main, .container";

/// Properties queried per matched element.
pub const COMPUTED_STYLE_PROPERTIES: [&str; 7] = [
    "color",
    "background-color",
    "font-family",
    "font-size",
    "font-weight",
    "border-color",
    "border-radius",
];

/// Computed style values for one matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedStyleEntry {
    /// Label of the element, `<tag>_<index>` (e.g. `body_0`, `h1_3`).
    pub label: String,
    /// `(property, value)` pairs; empty values are dropped during
    /// synthesis.
    pub properties: Vec<(String, String)>,
}

/// What the provider hands back for one page.
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    /// The rendered (or served) HTML.
    pub html: String,
    /// Computed-style entries, when the provider can answer them.
    pub computed_styles: Vec<ComputedStyleEntry>,
}

/// Capability: fetch one page and return its content, or fail.
///
/// A provider failure fails the whole extraction - there is nothing to
/// analyze without a page.
pub trait PageContentProvider {
    /// Fetch `url` within `timeout`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on network failure, non-success status
    /// (404/403 distinguished), empty content, or timeout.
    fn fetch(&self, url: &str, timeout: Duration) -> Result<RenderedPage, FetchError>;
}

/// Static-HTML provider: one blocking GET of the page URL.
///
/// JavaScript-injected styles are invisible to it, which the regex scanner
/// tolerates; swapping in a headless-browser provider changes no other
/// component.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPageProvider;

impl PageContentProvider for HttpPageProvider {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<RenderedPage, FetchError> {
        let html = net::fetch_text(url, timeout).map_err(FetchError::from)?;
        if html.trim().is_empty() {
            return Err(FetchError::EmptyContent);
        }
        Ok(RenderedPage {
            html,
            computed_styles: Vec::new(),
        })
    }
}
