use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwoUpError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Render error: {0}")]
    Pdfium(#[from] pdfium_render::prelude::PdfiumError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to process")]
    NoPages,
    #[error("No matching input files under {}", .0.display())]
    NoInputs(PathBuf),
}

pub type Result<T> = std::result::Result<T, TwoUpError>;

/// Direction in which the cell sequence is consumed during pairing.
///
/// `Reversed` flips the whole sequence before pairs are formed; it is not a
/// left/right swap within a pair, and it is independent of the filename
/// keyword rule that reverses the retained page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingOrder {
    #[default]
    Forward,
    Reversed,
}
