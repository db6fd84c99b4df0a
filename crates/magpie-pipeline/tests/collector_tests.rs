//! Integration tests for CSS source collection.

use magpie_pipeline::{
    ComputedStyleEntry, Deadline, FetchError, RenderedPage, StylesheetFetcher, collect_sources,
    collector::synthesize_computed,
};
use std::collections::HashMap;
use std::time::Duration;

/// Serves the sheets it knows about; every other URL fails.
struct FakeFetcher {
    sheets: HashMap<String, String>,
}

impl FakeFetcher {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            sheets: entries
                .iter()
                .map(|(url, css)| ((*url).to_string(), (*css).to_string()))
                .collect(),
        }
    }
}

impl StylesheetFetcher for FakeFetcher {
    fn fetch(&self, url: &str, _timeout: Duration) -> Result<String, FetchError> {
        self.sheets.get(url).cloned().ok_or(FetchError::NotFound)
    }
}

fn page_of(html: &str) -> RenderedPage {
    RenderedPage {
        html: html.to_string(),
        computed_styles: Vec::new(),
    }
}

fn collect(page: &RenderedPage, fetcher: &dyn StylesheetFetcher) -> magpie_style::StyleSourceSet {
    collect_sources(
        page,
        "https://example.com",
        fetcher,
        Duration::from_secs(10),
        &Deadline::new(Duration::from_secs(60)),
    )
}

#[test]
fn test_inline_blocks_indexed_in_document_order() {
    let page = page_of("<style>a{}</style><p>x</p><style type=\"text/css\">b{}</style>");
    let sources = collect(&page, &FakeFetcher::new(&[]));
    assert_eq!(sources.ids(), vec!["inline_style_0", "inline_style_1"]);
}

#[test]
fn test_external_sheets_fetched_and_resolved() {
    let page = page_of(r#"<link rel="stylesheet" href="/a.css"><link rel="STYLESHEET" href="/b.css">"#);
    let fetcher = FakeFetcher::new(&[
        ("https://example.com/a.css", "a { color: #111; }"),
        ("https://example.com/b.css", "b { color: #222; }"),
    ]);
    let sources = collect(&page, &fetcher);
    assert_eq!(sources.ids(), vec!["external_style_0", "external_style_1"]);
}

#[test]
fn test_non_stylesheet_links_ignored() {
    let page = page_of(r#"<link rel="icon" href="/favicon.ico"><link href="/a.css">"#);
    let sources = collect(&page, &FakeFetcher::new(&[]));
    assert!(sources.is_empty());
}

#[test]
fn test_failed_sheet_is_skipped_others_survive() {
    let page = page_of(
        r#"<link rel="stylesheet" href="/a.css">
           <link rel="stylesheet" href="/missing.css">
           <link rel="stylesheet" href="/c.css">"#,
    );
    let fetcher = FakeFetcher::new(&[
        ("https://example.com/a.css", "a { font-family: Alpha; }"),
        ("https://example.com/c.css", "c { font-family: Gamma; }"),
    ]);
    let sources = collect(&page, &fetcher);
    // The failed sheet leaves a gap in the indices.
    assert_eq!(sources.ids(), vec!["external_style_0", "external_style_2"]);

    let analysis = magpie_style::analyze(&sources);
    assert_eq!(analysis.fonts.len(), 2);
}

#[test]
fn test_inline_attributes_joined_into_one_source() {
    let page = page_of(r#"<div style="color: #fff"><span style='font-size: 10px'>x</span></div>"#);
    let sources = collect(&page, &FakeFetcher::new(&[]));
    assert_eq!(sources.ids(), vec!["inline_attributes"]);
    assert_eq!(
        sources.iter().next().unwrap().text,
        "color: #fff font-size: 10px"
    );
}

#[test]
fn test_style_attribute_value_may_contain_other_quote_kind() {
    let page = page_of(
        r#"<p style="font-family: 'Helvetica Neue', serif">a</p>
           <p style='content: "x"'>b</p>"#,
    );
    let sources = collect(&page, &FakeFetcher::new(&[]));
    assert_eq!(sources.ids(), vec!["inline_attributes"]);
    assert_eq!(
        sources.iter().next().unwrap().text,
        r#"font-family: 'Helvetica Neue', serif content: "x""#
    );
}

#[test]
fn test_computed_styles_synthesized_last() {
    let page = RenderedPage {
        html: "<style>a{}</style>".to_string(),
        computed_styles: vec![ComputedStyleEntry {
            label: "body_0".to_string(),
            properties: vec![
                ("color".to_string(), "rgb(0, 0, 0)".to_string()),
                ("border-color".to_string(), String::new()),
            ],
        }],
    };
    let sources = collect(&page, &FakeFetcher::new(&[]));
    assert_eq!(sources.ids(), vec!["inline_style_0", "computed_styles"]);
}

#[test]
fn test_synthesize_computed_format() {
    let entries = vec![
        ComputedStyleEntry {
            label: "body_0".to_string(),
            properties: vec![
                ("color".to_string(), "rgb(0, 0, 0)".to_string()),
                ("font-family".to_string(), "Arial".to_string()),
            ],
        },
        ComputedStyleEntry {
            label: "h1_1".to_string(),
            properties: vec![("color".to_string(), "#333333".to_string())],
        },
    ];
    assert_eq!(
        synthesize_computed(&entries),
        "#body_0 { color: rgb(0, 0, 0); font-family: Arial; } #h1_1 { color: #333333; }"
    );
}

#[test]
fn test_spent_deadline_skips_external_fetches() {
    let page = page_of(r#"<style>a { color: #123; }</style><link rel="stylesheet" href="/a.css">"#);
    let fetcher = FakeFetcher::new(&[("https://example.com/a.css", "a { color: #456; }")]);
    let sources = collect_sources(
        &page,
        "https://example.com",
        &fetcher,
        Duration::from_secs(10),
        &Deadline::new(Duration::ZERO),
    );
    // Inline content still collected; the external sheet is dropped.
    assert_eq!(sources.ids(), vec!["inline_style_0"]);
}
