//! Async load/save of lopdf documents; parsing and serialization run on the
//! blocking pool.

use crate::types::{Result, TwoUpError};
use lopdf::Document;
use std::path::Path;

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let document = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(document)
}

/// Load multiple PDF documents in order
pub async fn load_multiple_pdfs(paths: &[impl AsRef<Path>]) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(load_pdf(path).await?);
    }
    Ok(documents)
}

/// Serialize a document to a file, creating parent directories as needed
pub async fn save_pdf(mut document: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        document.save_to(&mut writer)?;
        Ok::<_, TwoUpError>(writer)
    })
    .await??;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
