//! CSS source collection from a rendered page.
//!
//! Gathers raw CSS text from every origin into one ordered
//! [`StyleSourceSet`]: inline `<style>` blocks, external stylesheets,
//! concatenated inline `style=` attributes, and synthesized computed-style
//! text. The HTML is scanned with regular expressions (no DOM), matching
//! the tolerance-over-precision approach of the style scanner itself.
//!
//! A failed external fetch is logged and leaves a gap in the external
//! indices; it never aborts collection. Only the page fetch itself (handled
//! upstream) is fatal.

use crate::deadline::Deadline;
use crate::error::FetchError;
use crate::provider::{ComputedStyleEntry, RenderedPage};
use magpie_common::{net, url::resolve_url, warning::warn_once};
use magpie_style::StyleSourceSet;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// Inline `<style>` element bodies.
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").unwrap());

/// Any `<link ...>` tag; rel/href are extracted from the tag text.
static LINK_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").unwrap());

/// `href="..."` inside a tag.
static HREF_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).unwrap());

/// `rel="..."` inside a tag.
static REL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)rel\s*=\s*["']([^"']*)["']"#).unwrap());

/// `style="..."` attributes anywhere in the document. The word boundary
/// keeps `stylesheet` and friends from matching. Each quoting style
/// terminates only on its own quote, so a double-quoted value may contain
/// single-quoted font names and vice versa.
static STYLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)\bstyle\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Capability: fetch the body of one external stylesheet.
///
/// A seam so the collector can be exercised without a network; the shipped
/// implementation is [`HttpStylesheetFetcher`].
pub trait StylesheetFetcher {
    /// Fetch the stylesheet at `url` within `timeout`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the sheet cannot be retrieved; the
    /// collector absorbs it as a skip.
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// Blocking HTTP stylesheet fetcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpStylesheetFetcher;

impl StylesheetFetcher for HttpStylesheetFetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        net::fetch_text(url, timeout).map_err(FetchError::from)
    }
}

/// Whether a `<link>` tag's `rel` contains the `stylesheet` token.
///
/// `rel` is a set of space-separated tokens, compared ASCII
/// case-insensitively.
fn is_stylesheet_link(tag: &str) -> bool {
    REL_ATTR.captures(tag).is_some_and(|c| {
        c[1].split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"))
    })
}

/// The hrefs of every stylesheet link in document order.
fn stylesheet_hrefs(html: &str) -> Vec<String> {
    LINK_TAG
        .find_iter(html)
        .filter(|tag| is_stylesheet_link(tag.as_str()))
        .filter_map(|tag| HREF_ATTR.captures(tag.as_str()).map(|c| c[1].to_string()))
        .filter(|href| !href.trim().is_empty())
        .collect()
}

/// Serialize computed-style entries into synthetic CSS rule blocks:
/// `#<tag>_<index> { prop: value; ... }`, blocks joined with spaces.
/// Entries with only empty values produce no block.
#[must_use]
pub fn synthesize_computed(entries: &[ComputedStyleEntry]) -> String {
    let mut blocks = Vec::new();
    for entry in entries {
        let declarations: Vec<String> = entry
            .properties
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(prop, value)| format!("{prop}: {value};"))
            .collect();
        if !declarations.is_empty() {
            blocks.push(format!("#{} {{ {} }}", entry.label, declarations.join(" ")));
        }
    }
    blocks.join(" ")
}

/// Collect every style source reachable from `page`, in a fixed order:
/// inline blocks, external sheets, inline attributes, computed synthesis.
///
/// External fetches are clamped to both `stylesheet_timeout` and the
/// remaining `deadline`; once the deadline is spent, remaining sheets are
/// skipped with a warning.
#[must_use]
pub fn collect_sources(
    page: &RenderedPage,
    base_url: &str,
    fetcher: &dyn StylesheetFetcher,
    stylesheet_timeout: Duration,
    deadline: &Deadline,
) -> StyleSourceSet {
    let mut sources = StyleSourceSet::new();

    for (index, block) in STYLE_BLOCK.captures_iter(&page.html).enumerate() {
        sources.push(format!("inline_style_{index}"), block[1].to_string());
    }

    let hrefs = stylesheet_hrefs(&page.html);
    for (index, href) in hrefs.iter().enumerate() {
        let sheet_url = resolve_url(href, Some(base_url));
        let Some(timeout) = deadline.clamp(stylesheet_timeout) else {
            warn_once(
                "Collector",
                &format!("time budget spent, skipping stylesheet {sheet_url}"),
            );
            continue;
        };
        match fetcher.fetch(&sheet_url, timeout) {
            Ok(text) => sources.push(format!("external_style_{index}"), text),
            Err(err) => warn_once(
                "Collector",
                &format!("skipping stylesheet {sheet_url}: {err}"),
            ),
        }
    }

    let attribute_values: Vec<String> = STYLE_ATTR
        .captures_iter(&page.html)
        .filter_map(|c| c.get(1).or(c.get(2)).map(|m| m.as_str().to_string()))
        .collect();
    if !attribute_values.is_empty() {
        sources.push("inline_attributes", attribute_values.join(" "));
    }

    if !page.computed_styles.is_empty() {
        let synthesized = synthesize_computed(&page.computed_styles);
        if !synthesized.is_empty() {
            sources.push("computed_styles", synthesized);
        }
    }

    sources
}
