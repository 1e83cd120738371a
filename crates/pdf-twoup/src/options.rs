use crate::classify::ClassifierStrategy;
use crate::geometry::CellSpec;
use crate::types::{ReadingOrder, Result, TwoUpError};

/// Per-job processing configuration. A plain value passed explicitly into
/// the pipeline; jobs with different settings can coexist.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessOptions {
    /// Target cell geometry and resolution
    pub cell: CellSpec,
    /// Blank-page strategy; `None` keeps every page
    pub classifier: Option<ClassifierStrategy>,
    /// Right-to-left filename marker; `None` disables keyword reversal
    pub rtl_keyword: Option<String>,
    /// Whole-sequence reversal applied before pairing
    pub reading_order: ReadingOrder,
    /// JPEG quality for composed sheets (1-100)
    pub jpeg_quality: u8,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            cell: CellSpec::b5(400),
            classifier: Some(ClassifierStrategy::exact_white()),
            rtl_keyword: Some("kokugo".to_string()),
            reading_order: ReadingOrder::Forward,
            jpeg_quality: 85,
        }
    }
}

impl ProcessOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| TwoUpError::Config(format!("Failed to parse options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TwoUpError::Config(format!("Failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.cell.width_px == 0 || self.cell.height_px == 0 {
            return Err(TwoUpError::Config(
                "Cell dimensions must be non-zero".to_string(),
            ));
        }
        if self.cell.dpi == 0 {
            return Err(TwoUpError::Config("Resolution must be non-zero".to_string()));
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(TwoUpError::Config(
                "JPEG quality must be between 1 and 100".to_string(),
            ));
        }
        if let Some(ClassifierStrategy::PixelThreshold { dpi, threshold, .. }) = self.classifier {
            if dpi == 0 {
                return Err(TwoUpError::Config(
                    "Classifier resolution must be non-zero".to_string(),
                ));
            }
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(TwoUpError::Config(
                    "Classifier threshold must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}
