//! Blank-page classification strategies.
//!
//! The pixel tests operate on an already-decoded raster so they can be
//! exercised without a rendering backend; the pdfium glue that feeds them
//! lives in `render`.

use image::DynamicImage;

/// Which pixel statistic decides blankness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelMode {
    /// Mean sample value across all channels >= threshold. Tolerates faint
    /// scan noise but can swallow very light content.
    MeanThreshold,
    /// Every sample is pure white. Stricter; a single gray pixel keeps the
    /// page.
    ExactWhite,
}

/// How a page is judged blank. Selected per job; the two pixel presets and
/// the structural test intentionally stay separate options.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassifierStrategy {
    /// Render the page at a low resolution and inspect the samples.
    PixelThreshold {
        dpi: u32,
        threshold: f32,
        mode: PixelMode,
    },
    /// A page is blank iff it has no extractable text and no page objects
    /// (images, paths, shading, forms). Resolution-independent, but only
    /// meaningful for paged documents.
    ContentInspection,
}

impl ClassifierStrategy {
    /// Mean-value test at 72 dpi against full white.
    pub fn mean_threshold() -> Self {
        Self::PixelThreshold {
            dpi: 72,
            threshold: 255.0,
            mode: PixelMode::MeanThreshold,
        }
    }

    /// Every-sample-white test at 100 dpi.
    pub fn exact_white() -> Self {
        Self::PixelThreshold {
            dpi: 100,
            threshold: 255.0,
            mode: PixelMode::ExactWhite,
        }
    }
}

/// Pixel blank test over a decoded raster.
pub fn is_blank_raster(image: &DynamicImage, threshold: f32, mode: PixelMode) -> bool {
    let rgb = image.to_rgb8();
    let samples = rgb.as_raw();
    if samples.is_empty() {
        return true;
    }
    match mode {
        PixelMode::MeanThreshold => {
            let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
            sum as f64 / samples.len() as f64 >= f64::from(threshold)
        }
        PixelMode::ExactWhite => samples.iter().all(|&s| s == u8::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3])))
    }

    #[test]
    fn pure_white_is_blank_under_both_modes() {
        let image = solid(10, 10, 255);
        assert!(is_blank_raster(&image, 255.0, PixelMode::MeanThreshold));
        assert!(is_blank_raster(&image, 255.0, PixelMode::ExactWhite));
    }

    #[test]
    fn near_white_splits_the_modes() {
        let mut raster = RgbImage::from_pixel(10, 10, Rgb([255; 3]));
        raster.put_pixel(3, 3, Rgb([254, 254, 254]));
        let image = DynamicImage::ImageRgb8(raster);
        // One slightly-off pixel fails the exact test but survives a relaxed
        // mean threshold.
        assert!(!is_blank_raster(&image, 255.0, PixelMode::ExactWhite));
        assert!(is_blank_raster(&image, 254.0, PixelMode::MeanThreshold));
        assert!(!is_blank_raster(&image, 255.0, PixelMode::MeanThreshold));
    }

    #[test]
    fn dark_content_is_never_blank() {
        let image = solid(10, 10, 40);
        assert!(!is_blank_raster(&image, 255.0, PixelMode::MeanThreshold));
        assert!(!is_blank_raster(&image, 255.0, PixelMode::ExactWhite));
    }

    #[test]
    fn presets_expose_their_variant() {
        assert!(matches!(
            ClassifierStrategy::mean_threshold(),
            ClassifierStrategy::PixelThreshold {
                dpi: 72,
                mode: PixelMode::MeanThreshold,
                ..
            }
        ));
        assert!(matches!(
            ClassifierStrategy::exact_white(),
            ClassifierStrategy::PixelThreshold {
                dpi: 100,
                mode: PixelMode::ExactWhite,
                ..
            }
        ));
    }
}
