//! Batch orchestration: input discovery, output-path mirroring, and the
//! sequential per-file job loop. This is the only module aware of directory
//! structure; everything downstream works on single documents.

use crate::io::save_pdf;
use crate::options::ProcessOptions;
use crate::pipeline::{DocumentOutcome, impose_pdf, strip_blanks};
use crate::stats::JobStatistics;
use crate::types::{Result, TwoUpError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Discovery and naming settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// File extension to accept (case-insensitive, without the dot)
    pub extension: String,
    /// Case-insensitive substring the file name must contain
    pub name_filter: Option<String>,
    /// Appended to the input stem to form the output file name
    pub suffix: String,
    /// Walk subdirectories, mirroring them under the output root
    pub recursive: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extension: "pdf".to_string(),
            name_filter: None,
            suffix: "_processed".to_string(),
            recursive: true,
        }
    }
}

/// Which per-document pipeline a batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// Blank removal, reordering and two-up composition
    Impose,
    /// Blank removal only; pages are copied, not rasterized
    StripBlanks,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Every eligible input under `root`, sorted by path. A plain file is its
/// own single-entry batch.
pub fn discover_inputs(root: &Path, options: &BatchOptions) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_owned()]);
    }

    let mut walker = WalkDir::new(root);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let filter = options.name_filter.as_deref().map(str::to_lowercase);
    let mut inputs = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if !matches_extension(&path, &options.extension) {
            continue;
        }
        if let Some(filter) = &filter {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if !name.contains(filter) {
                continue;
            }
        }
        inputs.push(path);
    }
    inputs.sort();
    Ok(inputs)
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Map an input to its output location: same path relative to the input
/// root, re-rooted under the output root, stem + suffix + `.pdf`.
pub fn mirrored_output_path(
    input: &Path,
    input_root: &Path,
    output_root: &Path,
    suffix: &str,
) -> PathBuf {
    let relative_parent = input
        .strip_prefix(input_root)
        .ok()
        .and_then(|relative| relative.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_root
        .join(relative_parent)
        .join(format!("{stem}{suffix}.pdf"))
}

/// Run one pipeline over every eligible input, strictly one job at a time.
/// A failing job is reported and skipped; it never stops the batch.
pub async fn run_batch(
    kind: JobKind,
    input_root: &Path,
    output_root: &Path,
    options: &ProcessOptions,
    batch: &BatchOptions,
) -> Result<BatchSummary> {
    let inputs = discover_inputs(input_root, batch)?;
    if inputs.is_empty() {
        return Err(TwoUpError::NoInputs(input_root.to_owned()));
    }

    let mut summary = BatchSummary::default();
    for input in inputs {
        let output = mirrored_output_path(&input, input_root, output_root, &batch.suffix);
        match run_job(kind, &input, &output, options).await {
            Ok(stats) => {
                summary.processed += 1;
                match kind {
                    JobKind::Impose => log::info!(
                        "{} -> {} ({} pages in, {} blank removed, {} sheets out)",
                        input.display(),
                        output.display(),
                        stats.source_pages,
                        stats.blank_pages_removed,
                        stats.output_pages,
                    ),
                    JobKind::StripBlanks => log::info!(
                        "{} -> {} ({} of {} pages kept)",
                        input.display(),
                        output.display(),
                        stats.pages_kept,
                        stats.source_pages,
                    ),
                }
            }
            Err(err) => {
                summary.failed += 1;
                log::error!("skipping {}: {}", input.display(), err);
            }
        }
    }
    Ok(summary)
}

async fn run_job(
    kind: JobKind,
    input: &Path,
    output: &Path,
    options: &ProcessOptions,
) -> Result<JobStatistics> {
    let DocumentOutcome { document, stats } = match kind {
        JobKind::Impose => impose_pdf(input, options).await?,
        JobKind::StripBlanks => strip_blanks(input, options).await?,
    };
    save_pdf(document, output).await?;
    Ok(stats)
}
