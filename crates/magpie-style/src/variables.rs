//! CSS custom-property resolution for font tokens.
//!
//! [CSS Custom Properties Level 1 § 3](https://www.w3.org/TR/css-variables-1/#using-variables)
//!
//! "If the value of the custom property named by the first argument to the
//! `var()` function is anything but the initial value, replace the `var()`
//! function by the value of the corresponding custom property."
//!
//! The table is built once per extraction pass from every `:root` block
//! across all sources, in collection order; a later declaration of the same
//! name overwrites an earlier one (single forward scan, last writer wins).
//! Only font tokens are resolved through this table - colors are counted
//! from literals exclusively, so a color declared purely via `var()` is
//! never captured. Single-level substitution; no fallback arguments, no
//! nested `var()` chains.

use crate::scan;
use crate::source::StyleSourceSet;
use std::collections::HashMap;

/// Mapping from a variable reference key (`var(--name)`) to its literal
/// declared value (a raw CSS value string).
#[derive(Debug, Clone, Default)]
pub struct CssVariables {
    map: HashMap<String, String>,
}

impl CssVariables {
    /// Build the table from every `:root` block in every source, in
    /// collection order.
    #[must_use]
    pub fn from_sources(sources: &StyleSourceSet) -> Self {
        let mut map = HashMap::new();
        for source in sources {
            for (name, value) in scan::root_variable_pairs(&source.text) {
                let _previous = map.insert(format!("var(--{name})"), value);
            }
        }
        Self { map }
    }

    /// Resolve a font token: a token beginning with `var(` is replaced by
    /// its declared value when present. An unresolved reference is returned
    /// unchanged so it gets counted literally (no silent drop).
    #[must_use]
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        if token.starts_with("var(") {
            self.map.get(token).map_or(token, String::as_str)
        } else {
            token
        }
    }

    /// Look up a declared value by its `var(--name)` key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no variables were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources_of(text: &str) -> StyleSourceSet {
        let mut set = StyleSourceSet::new();
        set.push("inline_style_0", text);
        set
    }

    #[test]
    fn test_builds_var_keys() {
        let vars = CssVariables::from_sources(&sources_of(
            ":root { --brand-font: Inter; --accent: #112233; }",
        ));
        assert_eq!(vars.get("var(--brand-font)"), Some("Inter"));
        assert_eq!(vars.get("var(--accent)"), Some("#112233"));
    }

    #[test]
    fn test_last_writer_wins() {
        let mut set = StyleSourceSet::new();
        set.push("inline_style_0", ":root { --brand: Alpha; }");
        set.push("external_style_0", ":root { --brand: Beta; }");
        let vars = CssVariables::from_sources(&set);
        assert_eq!(vars.get("var(--brand)"), Some("Beta"));
    }

    #[test]
    fn test_resolve_unknown_is_identity() {
        let vars = CssVariables::from_sources(&sources_of("body {}"));
        assert_eq!(vars.resolve("var(--missing)"), "var(--missing)");
        assert_eq!(vars.resolve("Arial"), "Arial");
    }

    #[test]
    fn test_nested_brace_truncation() {
        // The non-greedy block match stops at the first closing brace, so
        // declarations after a nested brace are lost. Preserved limitation.
        let vars = CssVariables::from_sources(&sources_of(
            ":root { --first: one; @media { } --second: two; }",
        ));
        assert_eq!(vars.get("var(--first)"), Some("one"));
        assert_eq!(vars.get("var(--second)"), None);
    }
}
