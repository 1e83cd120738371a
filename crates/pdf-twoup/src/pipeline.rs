//! Per-document pipelines: classify -> plan -> impose (or copy).
//!
//! The sync cores do all pdfium work; the async entry points run them on the
//! blocking pool with a fresh pdfium binding per job, so every handle is
//! released when the job's scope ends.

use crate::copy::copy_selected_pages;
use crate::impose::{build_raster_pdf, impose_cells};
use crate::options::ProcessOptions;
use crate::render::{classify_pages, init_pdfium, render_page_to_cell};
use crate::reorder::{keyword_matches, retained_indices};
use crate::stats::{JobStatistics, calculate_statistics};
use crate::types::Result;
use pdfium_render::prelude::*;
use std::path::Path;

/// Result of one per-document pipeline run.
pub struct DocumentOutcome {
    pub document: lopdf::Document,
    pub stats: JobStatistics,
}

/// Classification flags plus the retained index order for one document.
fn retention_plan(
    document: &PdfDocument<'_>,
    input: &Path,
    options: &ProcessOptions,
) -> (Vec<bool>, Vec<usize>) {
    let page_count = document.pages().len() as usize;
    let blank = match options.classifier {
        Some(strategy) => classify_pages(document, strategy),
        None => vec![false; page_count],
    };
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let reverse = options
        .rtl_keyword
        .as_deref()
        .is_some_and(|keyword| keyword_matches(&name, keyword));
    let keep = retained_indices(&blank, reverse);
    (blank, keep)
}

/// Full pipeline: drop blank pages, apply the filename reversal rule, render
/// the survivors to cells and compose them two-up.
pub fn impose_pdf_sync(
    pdfium: &Pdfium,
    input: &Path,
    options: &ProcessOptions,
) -> Result<DocumentOutcome> {
    options.validate()?;
    let source = pdfium.load_pdf_from_file(input, None)?;
    let (blank, keep) = retention_plan(&source, input, options);
    let stats = calculate_statistics(&blank, true)?;

    let mut cells = Vec::with_capacity(keep.len());
    for &index in &keep {
        let page = source.pages().get(index as u16)?;
        cells.push(render_page_to_cell(&page, options.cell)?);
    }

    let sheets = impose_cells(cells, options.cell, options.reading_order);
    let document = build_raster_pdf(&sheets, options.cell.dpi, options.jpeg_quality)?;
    Ok(DocumentOutcome { document, stats })
}

/// Blank removal without imposition: the retained pages are deep-copied, so
/// vector content survives untouched.
pub fn strip_blanks_sync(
    pdfium: &Pdfium,
    input: &Path,
    options: &ProcessOptions,
) -> Result<DocumentOutcome> {
    options.validate()?;
    let (blank, keep) = {
        let source = pdfium.load_pdf_from_file(input, None)?;
        retention_plan(&source, input, options)
    };
    let stats = calculate_statistics(&blank, false)?;

    let source = lopdf::Document::load(input)?;
    let document = copy_selected_pages(&source, &keep)?;
    Ok(DocumentOutcome { document, stats })
}

pub async fn impose_pdf(
    input: impl AsRef<Path>,
    options: &ProcessOptions,
) -> Result<DocumentOutcome> {
    let input = input.as_ref().to_owned();
    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        let pdfium = init_pdfium()?;
        impose_pdf_sync(&pdfium, &input, &options)
    })
    .await?
}

pub async fn strip_blanks(
    input: impl AsRef<Path>,
    options: &ProcessOptions,
) -> Result<DocumentOutcome> {
    let input = input.as_ref().to_owned();
    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        let pdfium = init_pdfium()?;
        strip_blanks_sync(&pdfium, &input, &options)
    })
    .await?
}
