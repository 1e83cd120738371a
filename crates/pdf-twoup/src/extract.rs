//! Page-range extraction into a fresh document.

use crate::copy::copy_selected_pages;
use crate::types::Result;
use lopdf::Document;

/// Copy the 0-based half-open index range `[start, end)` of `source` into a
/// new document. Indices past the last page are skipped; if nothing remains
/// the output gets a single blank page.
pub fn extract_pages(source: &Document, start: usize, end: usize) -> Result<Document> {
    let indices: Vec<usize> = (start..end).collect();
    copy_selected_pages(source, &indices)
}
