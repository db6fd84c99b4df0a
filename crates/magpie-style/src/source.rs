//! Ordered collection of raw CSS sources gathered from one page.
//!
//! Aggregation is order-independent, but collection order is preserved so
//! variable resolution ("last writer wins") and test results stay
//! reproducible.

/// One origin of CSS text: an inline `<style>` block, a fetched external
/// stylesheet, the concatenated inline `style=` attributes, or synthesized
/// computed-style text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSource {
    /// Identifier of the origin, e.g. `inline_style_0`, `external_style_2`,
    /// `inline_attributes`, `computed_styles`.
    pub id: String,
    /// The raw CSS text of this source.
    pub text: String,
}

/// The ordered set of style sources for one extraction run.
///
/// Ids are unique by construction: each collector step writes its own slot
/// and never reuses another step's id.
#[derive(Debug, Clone, Default)]
pub struct StyleSourceSet {
    sources: Vec<StyleSource>,
}

impl StyleSourceSet {
    /// Create an empty source set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a source under the given id, preserving collection order.
    pub fn push(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.sources.push(StyleSource {
            id: id.into(),
            text: text.into(),
        });
    }

    /// Iterate over the sources in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleSource> {
        self.sources.iter()
    }

    /// The source ids in collection order (persisted in the data artifact;
    /// source text is not).
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.id.clone()).collect()
    }

    /// Number of collected sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sources were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<'a> IntoIterator for &'a StyleSourceSet {
    type Item = &'a StyleSource;
    type IntoIter = std::slice::Iter<'a, StyleSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
