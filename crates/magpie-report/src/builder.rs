//! Artifact assembly from an extraction result.

use crate::data::{DataArtifact, UsageSummary};
use crate::document::{ColorRow, DocumentArtifact, FontRow, Swatch};
use magpie_style::{ColorToken, ExtractionResult};

/// Number of entries in the primary tables.
const PRIMARY_LIMIT: usize = 3;
/// Number of entries in the top-used JSON slices.
const TOP_USED_LIMIT: usize = 5;
/// Secondary colors cover ranks 4-6.
const SECONDARY_LIMIT: usize = 6;

/// Build both artifacts from one extraction result.
#[must_use]
pub fn build_artifacts(result: &ExtractionResult) -> (DocumentArtifact, DataArtifact) {
    (build_document(result), build_data(result))
}

/// Assemble the human-readable document artifact.
///
/// The secondary-colors table holds ranks 4-6 and stays empty when three or
/// fewer colors exist.
#[must_use]
pub fn build_document(result: &ExtractionResult) -> DocumentArtifact {
    let font_rows = result
        .top_fonts(PRIMARY_LIMIT)
        .into_iter()
        .map(|font| FontRow {
            count: result.analysis.fonts.count(&font),
            name: font.as_str().to_string(),
        })
        .collect();

    let ranked = result.top_colors(SECONDARY_LIMIT);
    let primary_colors = ranked
        .iter()
        .take(PRIMARY_LIMIT)
        .map(|c| color_row(result, c))
        .collect();
    let secondary_colors = ranked
        .iter()
        .skip(PRIMARY_LIMIT)
        .map(|c| color_row(result, c))
        .collect();

    DocumentArtifact {
        title: "Brand Style Guide".to_string(),
        url: result.url.clone(),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        logo_path: result.logo_path.clone(),
        font_rows,
        primary_colors,
        secondary_colors,
    }
}

/// Assemble the machine-readable data artifact.
#[must_use]
pub fn build_data(result: &ExtractionResult) -> DataArtifact {
    DataArtifact {
        url: result.url.clone(),
        fonts: UsageSummary {
            all: result.all_fonts(),
            top_used: result.top_fonts(TOP_USED_LIMIT),
        },
        colors: UsageSummary {
            all: result.all_colors(),
            top_used: result.top_colors(TOP_USED_LIMIT),
        },
        themes: result.theme.clone(),
        stylesheets: result.source_ids.clone(),
    }
}

/// A malformed token gets a placeholder swatch instead of aborting the
/// report.
fn color_row(result: &ExtractionResult, color: &ColorToken) -> ColorRow {
    let swatch = color
        .to_unit_rgb()
        .map_or(Swatch::Invalid, |(r, g, b)| Swatch::Rgb { r, g, b });
    ColorRow {
        swatch,
        hex: color.as_str().to_string(),
        count: result.analysis.colors.count(color),
    }
}
