//! Cell production: bringing an arbitrary raster to the exact cell size.

use crate::geometry::CellSpec;
use crate::types::Result;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageDecoder, ImageReader, Rgb, RgbImage};
use std::path::Path;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// An all-white cell, used to pad odd page counts.
pub fn blank_cell(spec: CellSpec) -> RgbImage {
    RgbImage::from_pixel(spec.width_px, spec.height_px, WHITE)
}

/// Resize so the source covers the cell box, then crop the centre to the
/// exact cell size. No letterboxing, no distortion; crop offsets are the
/// floor-divided halves of the excess, so the result is deterministic.
pub fn fit_to_cell(image: &DynamicImage, spec: CellSpec) -> RgbImage {
    let source = image.to_rgb8();
    let (source_w, source_h) = source.dimensions();
    if source_w == 0 || source_h == 0 {
        return blank_cell(spec);
    }

    let (target_w, target_h) = (spec.width_px, spec.height_px);
    let cover = (target_w as f64 / source_w as f64).max(target_h as f64 / source_h as f64);
    let resized_w = ((source_w as f64 * cover).round() as u32).max(target_w);
    let resized_h = ((source_h as f64 * cover).round() as u32).max(target_h);
    let resized = imageops::resize(&source, resized_w, resized_h, FilterType::Lanczos3);

    let left = (resized_w - target_w) / 2;
    let top = (resized_h - target_h) / 2;
    imageops::crop_imm(&resized, left, top, target_w, target_h).to_image()
}

/// Decode an image file, honouring its embedded orientation metadata.
pub fn load_oriented(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let mut decoder = reader.into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image)
}
