//! Font token normalization and generic-keyword exclusion.
//!
//! [CSS Fonts Level 4 § 2.1](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
//!
//! Generic family keywords and CSS-wide keywords carry no brand signal, so
//! they are excluded from counting. Everything else - including an
//! unresolved `var(--name)` reference - is counted, so missing variables
//! stay visible in the report for diagnosis.

use serde::Serialize;
use std::fmt;

/// CSS keywords excluded from font counting (case-insensitive).
///
/// The CSS-wide keywords `inherit`/`initial`/`unset` plus the generic
/// family names.
pub const GENERIC_FONT_KEYWORDS: [&str; 8] = [
    "inherit",
    "initial",
    "unset",
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
];

/// Whether `name` case-insensitively equals one of the excluded keywords.
#[must_use]
pub fn is_generic_keyword(name: &str) -> bool {
    GENERIC_FONT_KEYWORDS
        .iter()
        .any(|k| name.eq_ignore_ascii_case(k))
}

/// A normalized font name used as an aggregation key.
///
/// Quotes and surrounding whitespace are stripped by the scanner before a
/// token is constructed; the token itself stores the name verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FontToken(String);

impl FontToken {
    /// Wrap an already-normalized font name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The font name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_keyword_case_insensitive() {
        assert!(is_generic_keyword("Sans-Serif"));
        assert!(is_generic_keyword("INHERIT"));
        assert!(!is_generic_keyword("Arial"));
    }
}
