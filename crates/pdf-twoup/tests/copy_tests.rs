use lopdf::{Dictionary, Document, Object, Stream};
use pdf_twoup::{copy_selected_pages, extract_pages, merge_documents};

/// Synthetic PDF whose page widths encode their original index (600 + i),
/// so ordering survives round trips observably.
fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for i in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(600 + i as i64),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

#[test]
fn copies_selected_pages_in_the_given_order() {
    let source = create_test_pdf(5);
    let output = copy_selected_pages(&source, &[4, 2, 0]).unwrap();
    assert_eq!(page_widths(&output), vec![604, 602, 600]);
}

#[test]
fn out_of_range_indices_are_skipped() {
    let source = create_test_pdf(3);
    let output = copy_selected_pages(&source, &[1, 7, 2]).unwrap();
    assert_eq!(page_widths(&output), vec![601, 602]);
}

#[test]
fn empty_selection_substitutes_one_blank_page() {
    let source = create_test_pdf(4);
    let output = copy_selected_pages(&source, &[]).unwrap();
    assert_eq!(output.get_pages().len(), 1);
}

#[test]
fn copied_document_round_trips_through_serialization() {
    let source = create_test_pdf(3);
    let mut output = copy_selected_pages(&source, &[0, 2]).unwrap();

    let mut bytes = Vec::new();
    output.save_to(&mut bytes).unwrap();
    let reloaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(reloaded.get_pages().len(), 2);
}

#[test]
fn extract_copies_a_half_open_range() {
    let source = create_test_pdf(10);
    let output = extract_pages(&source, 4, 7).unwrap();
    assert_eq!(page_widths(&output), vec![604, 605, 606]);
}

#[test]
fn extract_clamps_to_the_document() {
    let source = create_test_pdf(3);
    let output = extract_pages(&source, 2, 50).unwrap();
    assert_eq!(page_widths(&output), vec![602]);
}

#[test]
fn extract_of_an_empty_range_yields_a_blank_page() {
    let source = create_test_pdf(3);
    let output = extract_pages(&source, 5, 5).unwrap();
    assert_eq!(output.get_pages().len(), 1);
}

#[test]
fn merge_concatenates_in_input_order() {
    let first = create_test_pdf(2);
    let second = create_test_pdf(3);
    let merged = merge_documents(&[first, second]).unwrap();
    assert_eq!(merged.get_pages().len(), 5);
    assert_eq!(page_widths(&merged), vec![600, 601, 600, 601, 602]);
}

#[test]
fn merge_of_no_pages_is_an_error() {
    assert!(merge_documents(&[]).is_err());
    assert!(merge_documents(&[create_test_pdf(0)]).is_err());
}
