//! Best-effort logo discovery and download.
//!
//! Scans the page HTML for a logo candidate - an `<img>` whose `alt`
//! mentions "logo", falling back to an icon `<link>`, then to the
//! `og:image` meta tag - and saves the asset into the output directory
//! unmodified (format conversion is out of scope). Every failure is a
//! normal outcome variant, never an error that aborts the run.

use magpie_common::{net, url::resolve_url, warning::warn_once};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());
static LINK_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").unwrap());
static META_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());

static ALT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)alt\s*=\s*["']([^"']*)["']"#).unwrap());
static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)src\s*=\s*["']([^"']+)["']"#).unwrap());
static REL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)rel\s*=\s*["']([^"']*)["']"#).unwrap());
static HREF_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).unwrap());
static PROPERTY_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)property\s*=\s*["']([^"']*)["']"#).unwrap());
static CONTENT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)content\s*=\s*["']([^"']+)["']"#).unwrap());

/// Extensions saved verbatim; anything else (including no extension)
/// defaults to `.png` for the filename only - bytes are never converted.
const KNOWN_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "svg", "webp", "ico"];

/// Outcome of the collect-or-skip logo step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoOutcome {
    /// The asset was downloaded and written to this path.
    Saved(PathBuf),
    /// A candidate existed but could not be collected.
    Skipped(String),
    /// The page offered no logo candidate.
    NotFound,
}

/// Find the first `<img>` with "logo" in its `alt` text.
fn logo_image_src(html: &str) -> Option<String> {
    IMG_TAG.find_iter(html).find_map(|tag| {
        let alt = ALT_ATTR.captures(tag.as_str())?;
        if alt[1].to_ascii_lowercase().contains("logo") {
            SRC_ATTR
                .captures(tag.as_str())
                .map(|src| src[1].to_string())
        } else {
            None
        }
    })
}

/// Find the first `<link>` whose `rel` mentions an icon.
fn icon_href(html: &str) -> Option<String> {
    LINK_TAG.find_iter(html).find_map(|tag| {
        let rel = REL_ATTR.captures(tag.as_str())?;
        if rel[1].to_ascii_lowercase().contains("icon") {
            HREF_ATTR
                .captures(tag.as_str())
                .map(|href| href[1].to_string())
        } else {
            None
        }
    })
}

/// Find the `og:image` meta content.
fn og_image_content(html: &str) -> Option<String> {
    META_TAG.find_iter(html).find_map(|tag| {
        let property = PROPERTY_ATTR.captures(tag.as_str())?;
        if property[1].eq_ignore_ascii_case("og:image") {
            CONTENT_ATTR
                .captures(tag.as_str())
                .map(|content| content[1].to_string())
        } else {
            None
        }
    })
}

/// File extension for the saved asset, from the URL path (query stripped).
fn asset_extension(url: &str) -> &'static str {
    let path = url.split('?').next().unwrap_or(url);
    let ext = path.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    KNOWN_EXTENSIONS
        .iter()
        .find(|known| **known == ext)
        .copied()
        .unwrap_or("png")
}

/// Discover and save the page's logo asset.
///
/// Candidate order: logo `<img>`, icon `<link>`, `og:image` meta. `data:`
/// URLs are decoded locally; everything else is fetched within `timeout`.
#[must_use]
pub fn discover_logo(
    html: &str,
    base_url: &str,
    output_dir: &Path,
    timeout: Duration,
) -> LogoOutcome {
    let Some(candidate) = logo_image_src(html)
        .or_else(|| icon_href(html))
        .or_else(|| og_image_content(html))
    else {
        return LogoOutcome::NotFound;
    };

    let asset_url = resolve_url(&candidate, Some(base_url));
    let bytes = match net::fetch_bytes(&asset_url, timeout) {
        Ok(bytes) => bytes,
        Err(err) => {
            let reason = format!("could not download logo {asset_url}: {err}");
            warn_once("Logo", &reason);
            return LogoOutcome::Skipped(reason);
        }
    };

    let path = output_dir.join(format!("logo.{}", asset_extension(&asset_url)));
    if let Err(err) = fs::create_dir_all(output_dir).and_then(|()| fs::write(&path, bytes)) {
        let reason = format!("could not save logo to {}: {err}", path.display());
        warn_once("Logo", &reason);
        return LogoOutcome::Skipped(reason);
    }
    LogoOutcome::Saved(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_image_preferred() {
        let html = r#"<img src="/hero.png" alt="Hero"><img src="/brand.svg" alt="Acme Logo">
                      <link rel="icon" href="/favicon.ico">"#;
        assert_eq!(logo_image_src(html), Some("/brand.svg".to_string()));
    }

    #[test]
    fn test_icon_fallback() {
        let html = r#"<link rel="shortcut icon" href="/favicon.ico">"#;
        assert_eq!(icon_href(html), Some("/favicon.ico".to_string()));
    }

    #[test]
    fn test_og_image_fallback() {
        let html = r#"<meta property="og:image" content="https://cdn.example.com/card.jpg">"#;
        assert_eq!(
            og_image_content(html),
            Some("https://cdn.example.com/card.jpg".to_string())
        );
    }

    #[test]
    fn test_asset_extension() {
        assert_eq!(asset_extension("https://x/brand.SVG?v=2"), "svg");
        assert_eq!(asset_extension("https://x/logo"), "png");
        assert_eq!(asset_extension("https://x/logo.php"), "png");
    }
}
