use pdf_twoup::{CellSpec, ClassifierStrategy, ProcessOptions, ReadingOrder};
use tempfile::TempDir;

#[test]
fn defaults_validate() {
    assert!(ProcessOptions::default().validate().is_ok());
}

#[test]
fn default_is_b5_400_exact_white_kokugo() {
    let options = ProcessOptions::default();
    assert_eq!(options.cell, CellSpec::b5(400));
    assert_eq!(options.classifier, Some(ClassifierStrategy::exact_white()));
    assert_eq!(options.rtl_keyword.as_deref(), Some("kokugo"));
    assert_eq!(options.reading_order, ReadingOrder::Forward);
}

#[test]
fn zero_cell_dimensions_are_rejected() {
    let mut options = ProcessOptions::default();
    options.cell.width_px = 0;
    assert!(options.validate().is_err());
}

#[test]
fn jpeg_quality_must_be_in_range() {
    let mut options = ProcessOptions::default();
    options.jpeg_quality = 0;
    assert!(options.validate().is_err());
    options.jpeg_quality = 101;
    assert!(options.validate().is_err());
    options.jpeg_quality = 100;
    assert!(options.validate().is_ok());
}

#[test]
fn classifier_threshold_must_be_positive() {
    let mut options = ProcessOptions::default();
    options.classifier = Some(ClassifierStrategy::PixelThreshold {
        dpi: 72,
        threshold: -1.0,
        mode: pdf_twoup::PixelMode::MeanThreshold,
    });
    assert!(options.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn options_round_trip_through_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");

    let mut options = ProcessOptions::default();
    options.cell = CellSpec::b5(300);
    options.reading_order = ReadingOrder::Reversed;
    options.rtl_keyword = None;

    options.save(&path).await.unwrap();
    let loaded = ProcessOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn invalid_options_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    tokio::fs::write(&path, b"{\"cell\": 12}").await.unwrap();
    assert!(ProcessOptions::load(&path).await.is_err());
}
