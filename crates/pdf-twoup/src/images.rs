//! Image-directory jobs: a sorted run of raster files becomes one PDF,
//! either imposed two-up or one page per image.

use crate::batch::{BatchOptions, discover_inputs};
use crate::cell::{fit_to_cell, load_oriented};
use crate::geometry::CellSpec;
use crate::impose::{build_raster_pdf, impose_cells};
use crate::types::{ReadingOrder, Result, TwoUpError};
use image::RgbImage;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Result of one image-directory job.
pub struct ImagesOutcome {
    pub document: Document,
    /// Default output location: next to the directory, named after it.
    pub output: PathBuf,
    pub image_count: usize,
}

/// `<parent>/<dir name><suffix>.pdf`
pub fn image_output_path(dir: &Path, suffix: &str) -> PathBuf {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = dir.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{name}{suffix}.pdf"))
}

pub fn images_to_pdf_sync(
    dir: &Path,
    spec: CellSpec,
    order: ReadingOrder,
    imposed: bool,
    jpeg_quality: u8,
) -> Result<ImagesOutcome> {
    let discovery = BatchOptions {
        extension: "jpg".to_string(),
        name_filter: None,
        suffix: String::new(),
        recursive: false,
    };
    let files = discover_inputs(dir, &discovery)?;
    if files.is_empty() {
        return Err(TwoUpError::NoInputs(dir.to_owned()));
    }

    let mut cells = Vec::with_capacity(files.len());
    for file in &files {
        cells.push(fit_to_cell(&load_oriented(file)?, spec));
    }

    let frames: Vec<RgbImage> = if imposed {
        impose_cells(cells, spec, order)
    } else {
        cells
    };
    let document = build_raster_pdf(&frames, spec.dpi, jpeg_quality)?;

    let suffix = if imposed { "_2in1_B4" } else { "_b5" };
    Ok(ImagesOutcome {
        document,
        output: image_output_path(dir, suffix),
        image_count: files.len(),
    })
}

pub async fn images_to_pdf(
    dir: impl AsRef<Path>,
    spec: CellSpec,
    order: ReadingOrder,
    imposed: bool,
    jpeg_quality: u8,
) -> Result<ImagesOutcome> {
    let dir = dir.as_ref().to_owned();
    tokio::task::spawn_blocking(move || {
        images_to_pdf_sync(&dir, spec, order, imposed, jpeg_quality)
    })
    .await?
}
