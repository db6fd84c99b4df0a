//! Regex pattern families for scanning raw CSS text.
//!
//! Four independent families are applied over the same text:
//! `:root` custom-property blocks, `font-family` declarations, hex color
//! literals, and `rgb()`/`rgba()` literals. Matches may overlap (the hex
//! pattern can fire inside malformed rgb digit runs) - this is a documented
//! property of the scanning approximation, not a defect.

use regex::Regex;
use std::sync::LazyLock;

/// `:root { ... }` blocks. Non-greedy to the nearest closing brace; a block
/// containing nested braces (a comment, a nested rule) truncates at the
/// first `}`. Known limitation, preserved deliberately.
static ROOT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":root\s*\{([^}]*)\}").unwrap());

/// `--name: value;` pairs inside a `:root` block.
static ROOT_VARIABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--(.*?):\s*(.*?);").unwrap());

/// `font-family: <value>` declarations, value captured up to the semicolon.
static FONT_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-family:\s*([^;]+)").unwrap());

/// 3-to-6-digit hex color literals.
///
/// [CSS Color Level 4 § 4.2](https://www.w3.org/TR/css-color-4/#hex-notation)
/// allows 3, 4, 6, or 8 digits; the 3-6 range matches the original scanner
/// and lets 4/5-digit junk through, which downstream swatch conversion
/// handles as a placeholder.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#([0-9a-fA-F]{3,6})").unwrap());

/// `rgb(r, g, b)` with integer components.
static RGB_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\((\d+),\s*(\d+),\s*(\d+)\)").unwrap());

/// `rgba(r, g, b, a)` with integer RGB; alpha is matched but discarded.
static RGBA_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba\((\d+),\s*(\d+),\s*(\d+),\s*([0-9.]+)\)").unwrap());

/// Extract `(name, value)` custom-property pairs from every `:root` block in
/// `text`, in document order. Names and values are trimmed.
#[must_use]
pub fn root_variable_pairs(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for block in ROOT_BLOCK.captures_iter(text) {
        let body = &block[1];
        for var in ROOT_VARIABLE.captures_iter(body) {
            pairs.push((var[1].trim().to_string(), var[2].trim().to_string()));
        }
    }
    pairs
}

/// Extract the raw value of every `font-family` declaration in `text`
/// (everything after the colon up to the semicolon, untrimmed and unsplit).
#[must_use]
pub fn font_declarations(text: &str) -> Vec<String> {
    FONT_DECLARATION
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// Split one `font-family` value on commas into candidate names, trimming
/// whitespace and surrounding single/double quotes from each. Empty
/// candidates (a trailing comma) are dropped.
#[must_use]
pub fn font_candidates(declaration: &str) -> Vec<String> {
    declaration
        .split(',')
        .map(|c| c.trim().trim_matches(|q| q == '\'' || q == '"').to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Extract the digit runs of every hex color literal in `text`, without the
/// leading `#` and without normalization.
#[must_use]
pub fn hex_matches(text: &str) -> Vec<String> {
    HEX_COLOR
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// Extract every `rgb()` literal in `text` as `(r, g, b)` channels.
///
/// Components above 255 do not fit an sRGB channel; those matches are
/// rejected rather than wrapped.
#[must_use]
pub fn rgb_matches(text: &str) -> Vec<(u8, u8, u8)> {
    RGB_COLOR
        .captures_iter(text)
        .filter_map(|c| parse_channels(&c[1], &c[2], &c[3]))
        .collect()
}

/// Extract every `rgba()` literal in `text` as `(r, g, b)` channels, with
/// the alpha component discarded.
#[must_use]
pub fn rgba_matches(text: &str) -> Vec<(u8, u8, u8)> {
    RGBA_COLOR
        .captures_iter(text)
        .filter_map(|c| parse_channels(&c[1], &c[2], &c[3]))
        .collect()
}

fn parse_channels(r: &str, g: &str, b: &str) -> Option<(u8, u8, u8)> {
    Some((r.parse().ok()?, g.parse().ok()?, b.parse().ok()?))
}
