//! pdfium adapter: the only module that touches the rendering backend.
//!
//! Handles are created and dropped inside a single job's scope and never
//! cross an await point.

use crate::cell::fit_to_cell;
use crate::classify::{ClassifierStrategy, PixelMode, is_blank_raster};
use crate::geometry::CellSpec;
use crate::types::{Result, TwoUpError};
use image::{DynamicImage, RgbImage, RgbaImage};
use pdfium_render::prelude::*;

/// Initialize Pdfium, trying the vendored library first, then falling back
/// to the system library.
pub fn init_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

fn bitmap_to_image(bitmap: &PdfBitmap) -> Result<DynamicImage> {
    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes().to_vec())
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| TwoUpError::Config("rendered bitmap has inconsistent dimensions".into()))
}

fn render_scaled(page: &PdfPage<'_>, scale: f32) -> Result<DynamicImage> {
    let config = PdfRenderConfig::new().scale_page_by_factor(scale);
    let bitmap = page.render_with_config(&config)?;
    bitmap_to_image(&bitmap)
}

/// Render a page so it covers the cell box, then crop to the exact cell.
pub fn render_page_to_cell(page: &PdfPage<'_>, spec: CellSpec) -> Result<RgbImage> {
    let width_pt = page.width().value;
    let height_pt = page.height().value;
    let scale = (spec.width_px as f32 / width_pt).max(spec.height_px as f32 / height_pt);
    let rendered = render_scaled(page, scale)?;
    Ok(fit_to_cell(&rendered, spec))
}

fn pixel_blank(page: &PdfPage<'_>, dpi: u32, threshold: f32, mode: PixelMode) -> Result<bool> {
    // Classification resolution, not output resolution; 1.0 scale = 72 dpi.
    let rendered = render_scaled(page, dpi as f32 / 72.0)?;
    Ok(is_blank_raster(&rendered, threshold, mode))
}

fn content_blank(page: &PdfPage<'_>) -> Result<bool> {
    let text = page.text()?.all();
    if !text.trim().is_empty() {
        return Ok(false);
    }
    Ok(page.objects().len() == 0)
}

/// Classify one page. Failures keep the page: a page we cannot analyze is
/// treated as content, never dropped.
pub fn page_is_blank(page: &PdfPage<'_>, strategy: ClassifierStrategy) -> bool {
    let verdict = match strategy {
        ClassifierStrategy::PixelThreshold {
            dpi,
            threshold,
            mode,
        } => pixel_blank(page, dpi, threshold, mode),
        ClassifierStrategy::ContentInspection => content_blank(page),
    };
    match verdict {
        Ok(blank) => blank,
        Err(err) => {
            log::warn!("page classification failed, keeping page: {err}");
            false
        }
    }
}

/// Blank flags for every page of the document, in page order.
pub fn classify_pages(document: &PdfDocument<'_>, strategy: ClassifierStrategy) -> Vec<bool> {
    document
        .pages()
        .iter()
        .map(|page| page_is_blank(&page, strategy))
        .collect()
}
