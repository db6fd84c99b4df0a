//! URL resolution utilities.
//!
//! Stylesheet hrefs and logo sources on real pages are usually relative;
//! this module resolves them against the analyzed page's URL. Simplified
//! path joining covering the common cases (absolute, protocol-relative,
//! root-relative, path-relative); no `.`/`..` segment normalization.

/// Resolve a potentially relative URL against a base URL.
///
/// Returns `href` unchanged when it is already absolute (or a `data:` URL)
/// or when no base is available.
#[must_use]
pub fn resolve_url(href: &str, base_url: Option<&str>) -> String {
    if href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("data:")
        || href.starts_with("file:")
    {
        return href.to_string();
    }

    let Some(base) = base_url else {
        return href.to_string();
    };

    if href.starts_with("//") {
        // Protocol-relative URL - prepend scheme from base
        if base.starts_with("https:") {
            format!("https:{href}")
        } else {
            format!("http:{href}")
        }
    } else if href.starts_with('/') {
        // Root-relative path - join with the base URL's origin
        base.find("://").map_or_else(
            || href.to_string(),
            |scheme_end| {
                let after_scheme = &base[scheme_end + 3..];
                after_scheme.find('/').map_or_else(
                    || format!("{base}{href}"),
                    |path_start| {
                        let origin = &base[..scheme_end + 3 + path_start];
                        format!("{origin}{href}")
                    },
                )
            },
        )
    } else {
        // Relative path - join with the base URL's directory
        let authority_start = base.find("://").map_or(0, |scheme_end| scheme_end + 3);
        let base_dir = if base[authority_start..].contains('/') {
            base.rsplit_once('/').map_or(base, |(dir, _)| dir)
        } else {
            // Origin-only base: the origin itself is the directory
            base
        };
        format!("{}/{href}", base_dir.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_unchanged() {
        assert_eq!(
            resolve_url("https://cdn.example.com/a.css", Some("https://example.com")),
            "https://cdn.example.com/a.css"
        );
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            resolve_url("//cdn.example.com/a.css", Some("https://example.com/page")),
            "https://cdn.example.com/a.css"
        );
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(
            resolve_url("/css/a.css", Some("https://example.com/blog/post")),
            "https://example.com/css/a.css"
        );
    }

    #[test]
    fn test_path_relative() {
        assert_eq!(
            resolve_url("a.css", Some("https://example.com/blog/post")),
            "https://example.com/blog/a.css"
        );
    }

    #[test]
    fn test_path_relative_against_origin_only_base() {
        assert_eq!(
            resolve_url("style.css", Some("https://example.com")),
            "https://example.com/style.css"
        );
        assert_eq!(
            resolve_url("style.css", Some("https://example.com/")),
            "https://example.com/style.css"
        );
    }

    #[test]
    fn test_no_base() {
        assert_eq!(resolve_url("/css/a.css", None), "/css/a.css");
    }
}
