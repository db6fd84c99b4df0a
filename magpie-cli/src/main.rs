//! Magpie CLI
//!
//! Analyzes one web page and writes a PDF + JSON brand style guide.

use anyhow::{Context, Result, bail};
use clap::Parser;
use magpie_pipeline::{BrandExtractor, ExtractOptions, HttpPageProvider, HttpStylesheetFetcher};
use magpie_report::FileRenderer;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Extract branding information from a website.
#[derive(Parser)]
#[command(name = "magpie", version, about)]
struct Cli {
    /// Website URL to analyze
    #[arg(short, long)]
    url: Option<String>,

    /// Output directory for reports
    #[arg(short, long, default_value = "reports")]
    output: PathBuf,

    /// Auto-open the generated PDF after completion
    #[arg(long)]
    open: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(url) = cli.url else {
        eprintln!("{}", "Error: URL is required".red());
        std::process::exit(1);
    };

    println!(
        "\nAnalyzing website: {}\nThis may take a few moments...",
        url.cyan()
    );

    let provider = HttpPageProvider;
    let fetcher = HttpStylesheetFetcher;
    let options = ExtractOptions {
        output_dir: cli.output,
        ..ExtractOptions::default()
    };
    let extractor = BrandExtractor::new(&provider, &fetcher, options);

    let (result, paths) = extractor
        .run_report(&url, &FileRenderer)
        .context("failed to analyze the website")?;

    println!("\n{}", "Reports generated:".green().bold());
    println!("PDF Report:  {}", paths.pdf.display());
    println!("JSON Report: {}", paths.json.display());
    println!(
        "Found {} fonts and {} colors across {} style sources",
        result.analysis.fonts.len(),
        result.analysis.colors.len(),
        result.source_ids.len()
    );

    if cli.open {
        open_file(&paths.pdf)?;
    }
    Ok(())
}

/// Open a file with the platform's default handler.
fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = Command::new("cmd");
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    #[cfg(target_os = "windows")]
    command.args(["/C", "start", ""]);

    let status = command
        .arg(path)
        .status()
        .with_context(|| format!("failed to open {}", path.display()))?;
    if !status.success() {
        bail!("opener exited with {status}");
    }
    Ok(())
}
