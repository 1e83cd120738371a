//! Batch processing of scanned paged documents: blank-page removal,
//! filename-driven right-to-left reordering, and two-up imposition onto
//! landscape sheets for booklet-style printing.

pub mod batch;
mod cell;
mod classify;
mod copy;
mod extract;
mod geometry;
mod images;
pub mod impose;
mod io;
mod merge;
mod options;
mod pipeline;
mod render;
mod reorder;
mod stats;
mod types;

pub use batch::{
    BatchOptions, BatchSummary, JobKind, discover_inputs, mirrored_output_path, run_batch,
};
pub use cell::{blank_cell, fit_to_cell, load_oriented};
pub use classify::{ClassifierStrategy, PixelMode, is_blank_raster};
pub use copy::copy_selected_pages;
pub use extract::extract_pages;
pub use geometry::{CellSpec, SheetSpec, mm_to_px, px_to_pt};
pub use images::{ImagesOutcome, image_output_path, images_to_pdf, images_to_pdf_sync};
pub use impose::{build_raster_pdf, compose_sheet, impose_cells};
pub use io::{load_multiple_pdfs, load_pdf, save_pdf};
pub use merge::{
    folder_merged_output_path, merge_documents, merge_files, merge_folder, merged_output_path,
};
pub use options::ProcessOptions;
pub use pipeline::{DocumentOutcome, impose_pdf, impose_pdf_sync, strip_blanks, strip_blanks_sync};
pub use render::{classify_pages, init_pdfium, page_is_blank, render_page_to_cell};
pub use reorder::{keyword_matches, retained_indices};
pub use stats::{JobStatistics, calculate_statistics};
pub use types::{ReadingOrder, Result, TwoUpError};
