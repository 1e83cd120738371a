//! lopdf page plumbing: deep-copying pages between documents and building
//! the output page tree.

use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// A4 in points, used when every page of a document has been filtered out
/// and a placeholder page keeps the output openable.
const FALLBACK_MEDIA_BOX: [i64; 4] = [0, 0, 595, 842];

/// Deep copy an object graph from `source` into `output`, following
/// references. The cache maps source object ids to their copies so shared
/// resources (fonts, images) are materialized once per source document.
fn deep_copy(
    output: &mut Document,
    source: &Document,
    object: &Object,
    copied: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match object {
        Object::Reference(id) => {
            if let Some(&new_id) = copied.get(id) {
                return Ok(Object::Reference(new_id));
            }
            let referenced = source.get_object(*id)?;
            let duplicate = deep_copy(output, source, referenced, copied)?;
            let new_id = output.add_object(duplicate);
            copied.insert(*id, new_id);
            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut duplicate = Dictionary::new();
            for (key, value) in dict.iter() {
                duplicate.set(key.clone(), deep_copy(output, source, value, copied)?);
            }
            Ok(Object::Dictionary(duplicate))
        }
        Object::Array(items) => {
            let mut duplicate = Vec::with_capacity(items.len());
            for item in items {
                duplicate.push(deep_copy(output, source, item, copied)?);
            }
            Ok(Object::Array(duplicate))
        }
        Object::Stream(stream) => {
            let mut dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                dict.set(key.clone(), deep_copy(output, source, value, copied)?);
            }
            Ok(Object::Stream(Stream {
                dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(object.clone()),
    }
}

/// Copy one page dictionary (content, resources, boxes) into `output` under
/// a new parent. `Parent` is rewritten rather than followed, which keeps the
/// copy from dragging in the source's whole page tree; `Annots` is dropped
/// because annotations back-reference their page.
pub(crate) fn copy_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    parent: ObjectId,
    copied: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let mut duplicate = Dictionary::new();
    for (key, value) in page_dict.iter() {
        if key.as_slice() == b"Parent" || key.as_slice() == b"Annots" {
            continue;
        }
        duplicate.set(key.clone(), deep_copy(output, source, value, copied)?);
    }
    duplicate.set("Parent", Object::Reference(parent));
    Ok(output.add_object(duplicate))
}

/// Append an empty page with the given MediaBox.
pub(crate) fn blank_page(output: &mut Document, media_box: Vec<Object>, parent: ObjectId) -> ObjectId {
    let content_id = output.add_object(Stream::new(Dictionary::new(), Vec::new()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent));
    page_dict.set("MediaBox", Object::Array(media_box));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));
    output.add_object(page_dict)
}

pub(crate) fn fallback_media_box() -> Vec<Object> {
    FALLBACK_MEDIA_BOX.iter().map(|&v| Object::Integer(v)).collect()
}

/// Install the pages tree and catalog for an output document whose pages
/// were created with `pages_id` as their parent.
pub(crate) fn finish_document(output: &mut Document, pages_id: ObjectId, kids: Vec<Object>) {
    let count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    output.trailer.set("Root", catalog_id);
}

/// Build a new document containing the given pages of `source`, in the given
/// order. Out-of-range indices are skipped; an empty selection produces one
/// blank page so the output is always openable.
pub fn copy_selected_pages(source: &Document, indices: &[usize]) -> Result<Document> {
    let page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut copied = HashMap::new();
    let mut kids = Vec::new();

    for &index in indices {
        if let Some(&page_id) = page_ids.get(index) {
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
        let media_box = fallback_media_box();
        kids.push(Object::Reference(blank_page(&mut output, media_box, pages_id)));
    }

    finish_document(&mut output, pages_id, kids);
    Ok(output)
}
