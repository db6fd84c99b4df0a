//! Integration tests for the analysis pipeline: normalization, keyword
//! exclusion, variable resolution, tie-breaking, and theme idempotence.

use magpie_style::{ColorToken, FontToken, StyleSourceSet, analyze, theme};

fn single_source(css: &str) -> StyleSourceSet {
    let mut sources = StyleSourceSet::new();
    sources.push("inline_style_0", css);
    sources
}

#[test]
fn test_hex_normalization() {
    let analysis = analyze(&single_source("a { color: #abc; } b { color: #1a2b3c; }"));
    let colors = analysis.top_colors(5);
    assert_eq!(
        colors,
        vec![
            ColorToken::from_hex_digits("aabbcc"),
            ColorToken::from_hex_digits("1a2b3c"),
        ]
    );
}

#[test]
fn test_rgb_and_rgba_share_a_counter() {
    let analysis = analyze(&single_source(
        "a { color: rgb(26, 43, 60); } b { color: rgba(26, 43, 60, 0.5); }",
    ));
    let token = ColorToken::from_hex_digits("1a2b3c");
    assert_eq!(analysis.colors.count(&token), 2);
    assert_eq!(analysis.colors.len(), 1);
}

#[test]
fn test_generic_keywords_excluded() {
    let analysis = analyze(&single_source("p { font-family: serif, Arial, sans-serif; }"));
    assert_eq!(analysis.top_fonts(5), vec![FontToken::new("Arial")]);
    assert_eq!(analysis.fonts.len(), 1);
}

#[test]
fn test_unresolved_variable_counted_literally() {
    let analysis = analyze(&single_source("p { font-family: var(--missing); }"));
    assert_eq!(analysis.top_fonts(1), vec![FontToken::new("var(--missing)")]);
}

#[test]
fn test_resolved_variable_counted_under_declared_value() {
    let css = ":root { --brand-font: Inter; } p { font-family: var(--brand-font); }";
    let analysis = analyze(&single_source(css));
    assert_eq!(analysis.top_fonts(1), vec![FontToken::new("Inter")]);
}

#[test]
fn test_variable_resolving_to_generic_keyword_is_excluded() {
    // Substitution happens before the keyword filter.
    let css = ":root { --fallback: serif; } p { font-family: var(--fallback), Georgia; }";
    let analysis = analyze(&single_source(css));
    assert_eq!(analysis.top_fonts(5), vec![FontToken::new("Georgia")]);
}

#[test]
fn test_color_variables_are_not_resolved() {
    // Only fonts pass through var() substitution; a color declared purely
    // via var() is never captured. The :root literal itself still counts
    // once (the hex pattern sees it in the declaration).
    let css = ":root { --accent: #112233; } a { color: var(--accent); }";
    let analysis = analyze(&single_source(css));
    let token = ColorToken::from_hex_digits("112233");
    assert_eq!(analysis.colors.count(&token), 1);
}

#[test]
fn test_tie_break_stability() {
    let css = "a { font-family: Alpha; } b { font-family: Beta; } c { font-family: Gamma; }";
    let sources = single_source(css);
    let analysis = analyze(&sources);
    for _ in 0..5 {
        assert_eq!(
            analysis.top_fonts(2),
            vec![FontToken::new("Alpha"), FontToken::new("Beta")]
        );
    }
}

#[test]
fn test_counts_not_deduplicated_per_source() {
    let analysis = analyze(&single_source(
        "a { color: #fff; } b { color: #fff; } c { color: #fff; }",
    ));
    let token = ColorToken::from_hex_digits("ffffff");
    assert_eq!(analysis.colors.count(&token), 3);
}

#[test]
fn test_aggregation_across_sources() {
    let mut sources = StyleSourceSet::new();
    sources.push("inline_style_0", "a { font-family: Inter; }");
    sources.push("external_style_0", "b { font-family: Inter; color: #fff; }");
    sources.push("inline_attributes", "color: #fff");
    let analysis = analyze(&sources);
    assert_eq!(analysis.fonts.count(&FontToken::new("Inter")), 2);
    assert_eq!(
        analysis.colors.count(&ColorToken::from_hex_digits("fff")),
        2
    );
}

#[test]
fn test_theme_summarization_idempotent() {
    let analysis = analyze(&single_source(
        "a { color: #123456; font-family: Inter, Georgia; } b { color: #abc; }",
    ));
    let first = theme::summarize(&analysis);
    let second = theme::summarize(&analysis);
    assert_eq!(first, second);
    assert_eq!(first.primary_colors.len(), 2);
    assert_eq!(first.fonts.len(), 2);
    assert_eq!(first.color_scheme.len(), 2);
}
