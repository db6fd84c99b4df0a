//! Color token normalization.
//!
//! [CSS Color Level 4 § 4.2](https://www.w3.org/TR/css-color-4/#hex-notation)
//!
//! "The three-digit RGB notation (#RGB) is converted into six-digit form
//! (#RRGGBB) by replicating digits, not by adding zeros."
//!
//! The canonical token form is a lowercase `#`-prefixed 6-digit hex string.
//! `rgb()`/`rgba()` literals normalize into the same form (alpha dropped) so
//! `rgb(26,43,60)` and `#1a2b3c` share one frequency slot. The scanner's 3-6
//! digit hex pattern can also capture 4- or 5-digit runs; those are kept
//! as-is (lowercased) and surface later as placeholder swatch rows instead
//! of crashing report generation.

use serde::Serialize;
use std::fmt;

/// A normalized color token used as an aggregation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    /// Normalize the digit run of a hex literal (no leading `#`).
    ///
    /// Three digits are doubled into six; everything else is lowercased
    /// unchanged, including malformed 4/5-digit runs.
    #[must_use]
    pub fn from_hex_digits(digits: &str) -> Self {
        let lower = digits.to_ascii_lowercase();
        let expanded = if lower.len() == 3 {
            let mut doubled = String::with_capacity(6);
            for c in lower.chars() {
                doubled.push(c);
                doubled.push(c);
            }
            doubled
        } else {
            lower
        };
        Self(format!("#{expanded}"))
    }

    /// Normalize integer RGB channels into six-digit hex form.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// The normalized `#rrggbb` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to unit-interval channels `(r/255, g/255, b/255)` for swatch
    /// rendering.
    ///
    /// Returns `None` for malformed tokens (wrong length, non-hex digits);
    /// the report builder substitutes a placeholder row in that case.
    #[must_use]
    pub fn to_unit_rgb(&self) -> Option<(f32, f32, f32)> {
        let hex = self.0.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_digit_doubles() {
        assert_eq!(ColorToken::from_hex_digits("abc").as_str(), "#aabbcc");
    }

    #[test]
    fn test_six_digit_lowercases() {
        assert_eq!(ColorToken::from_hex_digits("1A2B3C").as_str(), "#1a2b3c");
    }

    #[test]
    fn test_rgb_formats_hex() {
        assert_eq!(ColorToken::from_rgb(26, 43, 60).as_str(), "#1a2b3c");
    }

    #[test]
    fn test_malformed_length_kept() {
        let token = ColorToken::from_hex_digits("abcd");
        assert_eq!(token.as_str(), "#abcd");
        assert!(token.to_unit_rgb().is_none());
    }

    #[test]
    fn test_unit_rgb() {
        let (r, g, b) = ColorToken::from_hex_digits("ff0080").to_unit_rgb().unwrap();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!(g.abs() < f32::EPSILON);
        assert!((b - 128.0 / 255.0).abs() < f32::EPSILON);
    }
}
