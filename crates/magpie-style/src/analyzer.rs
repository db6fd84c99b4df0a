//! Two-pass analysis over the collected style sources.
//!
//! Pass one builds the custom-property table from every `:root` block; pass
//! two scans every source for font declarations and color literals, feeding
//! the frequency tables. Variable substitution happens before the
//! generic-keyword filter and before counting, so a variable that resolves
//! to a generic family is excluded just like a literal one.

use crate::color::ColorToken;
use crate::font::{FontToken, is_generic_keyword};
use crate::frequency::FrequencyTable;
use crate::scan;
use crate::source::StyleSourceSet;
use crate::variables::CssVariables;

/// The final aggregator state for one extraction run.
#[derive(Debug, Clone, Default)]
pub struct StyleAnalysis {
    /// Custom-property declarations captured from `:root` blocks.
    pub variables: CssVariables,
    /// Font occurrence counts.
    pub fonts: FrequencyTable<FontToken>,
    /// Color occurrence counts.
    pub colors: FrequencyTable<ColorToken>,
}

impl StyleAnalysis {
    /// Record one font occurrence.
    pub fn record_font(&mut self, token: FontToken) {
        self.fonts.record(token);
    }

    /// Record one color occurrence.
    pub fn record_color(&mut self, token: ColorToken) {
        self.colors.record(token);
    }

    /// The `n` most-used fonts.
    #[must_use]
    pub fn top_fonts(&self, n: usize) -> Vec<FontToken> {
        self.fonts.top(n)
    }

    /// The `n` most-used colors.
    #[must_use]
    pub fn top_colors(&self, n: usize) -> Vec<ColorToken> {
        self.colors.top(n)
    }
}

/// Run the full scan over `sources` and return the aggregated analysis.
#[must_use]
pub fn analyze(sources: &StyleSourceSet) -> StyleAnalysis {
    let variables = CssVariables::from_sources(sources);
    let mut analysis = StyleAnalysis {
        variables,
        ..StyleAnalysis::default()
    };

    for source in sources {
        for declaration in scan::font_declarations(&source.text) {
            for candidate in scan::font_candidates(&declaration) {
                let resolved = analysis.variables.resolve(&candidate).to_string();
                if is_generic_keyword(&resolved) {
                    continue;
                }
                analysis.record_font(FontToken::new(resolved));
            }
        }

        for digits in scan::hex_matches(&source.text) {
            analysis.record_color(ColorToken::from_hex_digits(&digits));
        }
        for (r, g, b) in scan::rgb_matches(&source.text) {
            analysis.record_color(ColorToken::from_rgb(r, g, b));
        }
        for (r, g, b) in scan::rgba_matches(&source.text) {
            analysis.record_color(ColorToken::from_rgb(r, g, b));
        }
    }

    analysis
}
