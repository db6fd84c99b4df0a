//! Minimal single-page PDF serialization of the document artifact.
//!
//! A self-contained writer for the small fixed document this tool produces:
//! one US-letter page, Helvetica/Helvetica-Bold text, and vector rectangles
//! for color swatches. Only the PDF features the style guide needs are
//! emitted (catalog, page tree, two Type1 fonts, one content stream, xref
//! table); the top-3 tables always fit one page. The logo asset is
//! referenced by its saved path rather than embedded - image decoding and
//! recompression are outside this tool's scope.
//!
//! Text is restricted to ASCII in the content stream; other characters are
//! replaced with `?` so the stream stays valid regardless of page content.

use crate::document::{DocumentArtifact, Swatch};

/// Page size: US letter in points.
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
/// Left/right/top margin in points.
const MARGIN: f32 = 72.0;

/// Regular text font resource name.
const FONT_REGULAR: &str = "/F1";
/// Bold text font resource name.
const FONT_BOLD: &str = "/F2";

/// Accumulates content-stream operations top-down with a descending cursor.
struct Composer {
    ops: String,
    y: f32,
}

impl Composer {
    fn new() -> Self {
        Self {
            ops: String::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Escape a string for a PDF literal string and clamp it to ASCII.
    fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '(' | ')' | '\\' => {
                    out.push('\\');
                    out.push(c);
                }
                ' '..='~' => out.push(c),
                _ => out.push('?'),
            }
        }
        out
    }

    fn text_at(&mut self, x: f32, y: f32, font: &str, size: f32, text: &str) {
        let escaped = Self::escape(text);
        self.ops.push_str(&format!(
            "BT {font} {size:.1} Tf {x:.1} {y:.1} Td ({escaped}) Tj ET\n"
        ));
    }

    /// Emit one full-width text line at the cursor and advance it.
    fn line(&mut self, font: &str, size: f32, text: &str) {
        self.y -= size + 6.0;
        self.text_at(MARGIN, self.y, font, size, text);
    }

    fn heading(&mut self, size: f32, text: &str) {
        self.y -= 8.0;
        self.line(FONT_BOLD, size, text);
    }

    fn spacer(&mut self, points: f32) {
        self.y -= points;
    }

    /// Filled, outlined swatch rectangle.
    fn swatch(&mut self, x: f32, y: f32, side: f32, r: f32, g: f32, b: f32) {
        self.ops.push_str(&format!(
            "{r:.3} {g:.3} {b:.3} rg {x:.1} {y:.1} {side:.1} {side:.1} re f\n"
        ));
        self.ops.push_str(&format!(
            "0 0 0 RG 0.5 w {x:.1} {y:.1} {side:.1} {side:.1} re S\n"
        ));
    }

    fn finish(self) -> String {
        self.ops
    }
}

/// Compose the content stream for the whole document.
fn compose_content(doc: &DocumentArtifact) -> String {
    let mut page = Composer::new();

    if let Some(logo) = &doc.logo_path {
        page.line(
            FONT_REGULAR,
            9.0,
            &format!("Logo asset: {}", logo.display()),
        );
        page.spacer(6.0);
    }

    page.line(FONT_BOLD, 24.0, &doc.title);
    page.spacer(6.0);
    page.heading(14.0, "Website Analysis");
    page.line(FONT_REGULAR, 11.0, &format!("URL: {}", doc.url));
    page.line(
        FONT_REGULAR,
        11.0,
        &format!("Generated: {}", doc.generated_at),
    );
    page.spacer(14.0);

    page.heading(14.0, "Typography");
    page.heading(12.0, "Primary Fonts");
    if doc.font_rows.is_empty() {
        page.line(FONT_REGULAR, 11.0, "No fonts detected");
    } else {
        font_table_header(&mut page);
        for row in &doc.font_rows {
            page.y -= 16.0;
            page.text_at(MARGIN, page.y, FONT_REGULAR, 11.0, &row.name);
            page.text_at(
                MARGIN + 280.0,
                page.y,
                FONT_REGULAR,
                11.0,
                &row.count.to_string(),
            );
        }
    }
    page.spacer(14.0);

    page.heading(14.0, "Color Palette");
    page.heading(12.0, "Primary Colors");
    color_table(&mut page, &doc.primary_colors);

    if !doc.secondary_colors.is_empty() {
        page.spacer(14.0);
        page.heading(12.0, "Secondary Colors");
        color_table(&mut page, &doc.secondary_colors);
    }

    page.finish()
}

fn font_table_header(page: &mut Composer) {
    page.y -= 16.0;
    page.text_at(MARGIN, page.y, FONT_BOLD, 11.0, "Font");
    page.text_at(MARGIN + 280.0, page.y, FONT_BOLD, 11.0, "Usage Count");
}

fn color_table(page: &mut Composer, rows: &[crate::document::ColorRow]) {
    if rows.is_empty() {
        page.line(FONT_REGULAR, 11.0, "No colors detected");
        return;
    }
    page.y -= 16.0;
    page.text_at(MARGIN, page.y, FONT_BOLD, 11.0, "Color");
    page.text_at(MARGIN + 80.0, page.y, FONT_BOLD, 11.0, "Hex Code");
    page.text_at(MARGIN + 280.0, page.y, FONT_BOLD, 11.0, "Usage Count");
    for row in rows {
        page.y -= 18.0;
        match row.swatch {
            Swatch::Rgb { r, g, b } => page.swatch(MARGIN, page.y - 2.0, 12.0, r, g, b),
            Swatch::Invalid => page.text_at(MARGIN, page.y, FONT_REGULAR, 11.0, "Error"),
        }
        page.text_at(MARGIN + 80.0, page.y, FONT_REGULAR, 11.0, &row.hex);
        page.text_at(
            MARGIN + 280.0,
            page.y,
            FONT_REGULAR,
            11.0,
            &row.count.to_string(),
        );
    }
}

/// Serialize the document artifact into PDF bytes.
#[must_use]
pub fn render_pdf(doc: &DocumentArtifact) -> Vec<u8> {
    let content = compose_content(doc);

    let objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
             /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}endstream",
            content.len()
        ),
    ];

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", index + 1).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_literal_string() {
        assert_eq!(Composer::escape("a(b)c\\d"), "a\\(b\\)c\\\\d");
        assert_eq!(Composer::escape("café"), "caf?");
    }
}
