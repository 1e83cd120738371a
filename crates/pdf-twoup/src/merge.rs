//! Concatenating whole documents, either from an explicit file list or from
//! a single directory level.

use crate::batch::{BatchOptions, discover_inputs};
use crate::copy::{copy_page, finish_document};
use crate::io::load_multiple_pdfs;
use crate::types::{Result, TwoUpError};
use lopdf::{Document, Object};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Concatenate all pages of the given documents, in order.
pub fn merge_documents(documents: &[Document]) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut kids = Vec::new();

    for source in documents {
        // Object ids are per-document; the copy cache must not leak across
        // sources.
        let mut copied = HashMap::new();
        for &page_id in source.get_pages().values() {
            kids.push(Object::Reference(copy_page(
                &mut output,
                source,
                page_id,
                pages_id,
                &mut copied,
            )?));
        }
    }

    if kids.is_empty() {
        return Err(TwoUpError::NoPages);
    }

    finish_document(&mut output, pages_id, kids);
    Ok(output)
}

/// `<first input stem>_merged.pdf`, next to the first input.
pub fn merged_output_path(first_input: &Path) -> PathBuf {
    let stem = first_input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    first_input.with_file_name(format!("{stem}_merged.pdf"))
}

/// Merge an explicit list of files.
pub async fn merge_files(inputs: &[impl AsRef<Path>]) -> Result<Document> {
    if inputs.is_empty() {
        return Err(TwoUpError::NoPages);
    }
    let documents = load_multiple_pdfs(inputs).await?;
    tokio::task::spawn_blocking(move || merge_documents(&documents)).await?
}

/// Merge every `.pdf` directly inside `dir` (not recursive), sorted by file
/// name. Returns the merged document together with the files it consumed.
pub async fn merge_folder(dir: &Path) -> Result<(Document, Vec<PathBuf>)> {
    let options = BatchOptions {
        recursive: false,
        ..BatchOptions::default()
    };
    let inputs = discover_inputs(dir, &options)?;
    if inputs.is_empty() {
        return Err(TwoUpError::NoInputs(dir.to_owned()));
    }
    let merged = merge_files(&inputs).await?;
    Ok((merged, inputs))
}

/// `<folder name>_merged.pdf`, inside the folder itself.
pub fn folder_merged_output_path(dir: &Path) -> PathBuf {
    let name = dir
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("{name}_merged.pdf"))
}
