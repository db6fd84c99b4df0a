//! The renderer seam and the default file-writing renderer.

use crate::data::DataArtifact;
use crate::document::DocumentArtifact;
use crate::{json, pdf};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce the output files. Fatal for the run: a report that
/// cannot be written makes the extraction meaningless.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output directory could not be created.
    #[error("failed to prepare output directory {path}: {source}")]
    OutputDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A report file could not be written.
    #[error("failed to write report file {path}: {source}")]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The data artifact failed to serialize.
    #[error("failed to serialize data artifact: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Paths of the two files one render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// The document artifact file.
    pub pdf: PathBuf,
    /// The data artifact file.
    pub json: PathBuf,
}

/// Consumes the two artifacts and writes a PDF and a JSON file into a
/// caller-specified output directory.
pub trait ReportRenderer {
    /// Render both artifacts, returning the written paths.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the directory cannot be created or
    /// either file cannot be produced.
    fn render(
        &self,
        document: &DocumentArtifact,
        data: &DataArtifact,
        output_dir: &Path,
    ) -> Result<ReportPaths, RenderError>;
}

/// Default renderer: timestamped `brand_report_<YYYYMMDD_HHMMSS>.{pdf,json}`
/// files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRenderer;

impl ReportRenderer for FileRenderer {
    fn render(
        &self,
        document: &DocumentArtifact,
        data: &DataArtifact,
        output_dir: &Path,
    ) -> Result<ReportPaths, RenderError> {
        fs::create_dir_all(output_dir).map_err(|source| RenderError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let pdf_path = output_dir.join(format!("brand_report_{stamp}.pdf"));
        let json_path = output_dir.join(format!("brand_report_{stamp}.json"));

        fs::write(&pdf_path, pdf::render_pdf(document)).map_err(|source| RenderError::Write {
            path: pdf_path.clone(),
            source,
        })?;

        let json_text = json::to_json_pretty(data)?;
        fs::write(&json_path, json_text).map_err(|source| RenderError::Write {
            path: json_path.clone(),
            source,
        })?;

        Ok(ReportPaths {
            pdf: pdf_path,
            json: json_path,
        })
    }
}
