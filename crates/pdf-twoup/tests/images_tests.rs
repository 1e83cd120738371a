use image::{Rgb, RgbImage};
use lopdf::Document;
use pdf_twoup::{CellSpec, ReadingOrder, images_to_pdf_sync};
use tempfile::TempDir;

fn spec() -> CellSpec {
    CellSpec {
        width_px: 40,
        height_px: 60,
        dpi: 72,
    }
}

/// Three JPEGs of mixed aspect ratios, named so lexicographic order is
/// observable.
fn write_scans(dir: &TempDir) {
    let shapes = [(120u32, 80u32), (50, 200), (64, 64)];
    for (i, (w, h)) in shapes.iter().enumerate() {
        let image = RgbImage::from_pixel(*w, *h, Rgb([(i as u8 + 1) * 40; 3]));
        image.save(dir.path().join(format!("scan_{i:03}.jpg"))).unwrap();
    }
}

fn page_sizes(document: &Document) -> Vec<(f32, f32)> {
    document
        .get_pages()
        .values()
        .map(|&id| {
            let page = document.get_dictionary(id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            (
                media_box[2].as_float().unwrap(),
                media_box[3].as_float().unwrap(),
            )
        })
        .collect()
}

#[test]
fn mixed_aspect_scans_become_two_sheets() {
    let dir = TempDir::new().unwrap();
    write_scans(&dir);

    let outcome = images_to_pdf_sync(dir.path(), spec(), ReadingOrder::Forward, true, 85).unwrap();
    assert_eq!(outcome.image_count, 3);
    // 3 cells padded to 4 -> 2 sheets, each exactly two cells wide
    assert_eq!(outcome.document.get_pages().len(), 2);
    for (width_pt, height_pt) in page_sizes(&outcome.document) {
        assert_eq!(width_pt, 80.0);
        assert_eq!(height_pt, 60.0);
    }
}

#[test]
fn single_mode_writes_one_page_per_image() {
    let dir = TempDir::new().unwrap();
    write_scans(&dir);

    let outcome = images_to_pdf_sync(dir.path(), spec(), ReadingOrder::Forward, false, 85).unwrap();
    assert_eq!(outcome.document.get_pages().len(), 3);
    for (width_pt, height_pt) in page_sizes(&outcome.document) {
        assert_eq!(width_pt, 40.0);
        assert_eq!(height_pt, 60.0);
    }
}

#[test]
fn output_is_named_after_the_directory() {
    let dir = TempDir::new().unwrap();
    write_scans(&dir);

    let outcome = images_to_pdf_sync(dir.path(), spec(), ReadingOrder::Forward, true, 85).unwrap();
    let name = outcome.output.file_name().unwrap().to_string_lossy().into_owned();
    let dir_name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name, format!("{dir_name}_2in1_B4.pdf"));
    assert_eq!(outcome.output.parent(), dir.path().parent());
}

#[test]
fn empty_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(images_to_pdf_sync(dir.path(), spec(), ReadingOrder::Forward, true, 85).is_err());
}
