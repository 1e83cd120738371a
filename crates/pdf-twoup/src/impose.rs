//! The two-up composition engine: cells are paired onto landscape sheets,
//! and the sheets become JPEG-backed pages of a new document.

use crate::cell::blank_cell;
use crate::copy::finish_document;
use crate::geometry::{CellSpec, px_to_pt};
use crate::types::{ReadingOrder, Result, TwoUpError};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, Rgb, RgbImage, imageops};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Place two cells side by side on a white sheet twice the cell width.
pub fn compose_sheet(left: &RgbImage, right: &RgbImage, spec: CellSpec) -> RgbImage {
    let sheet = spec.sheet();
    let mut canvas = RgbImage::from_pixel(sheet.width_px, sheet.height_px, Rgb([255, 255, 255]));
    imageops::replace(&mut canvas, left, 0, 0);
    imageops::replace(&mut canvas, right, i64::from(spec.width_px), 0);
    canvas
}

/// Pair cells consecutively into sheets.
///
/// With `ReadingOrder::Reversed` the whole sequence is flipped before
/// pairing. An odd count is padded with one all-white cell; an empty input
/// still produces a single all-white sheet so the output document is never
/// empty. Sheet count is therefore max(1, ceil(N/2)).
pub fn impose_cells(mut cells: Vec<RgbImage>, spec: CellSpec, order: ReadingOrder) -> Vec<RgbImage> {
    if order == ReadingOrder::Reversed {
        cells.reverse();
    }
    if cells.is_empty() {
        cells.push(blank_cell(spec));
    }
    if cells.len() % 2 == 1 {
        cells.push(blank_cell(spec));
    }
    cells
        .chunks_exact(2)
        .map(|pair| compose_sheet(&pair[0], &pair[1], spec))
        .collect()
}

/// Build a document whose pages are the given raster frames, JPEG-encoded
/// and sized physically from their pixel dimensions at `dpi`.
pub fn build_raster_pdf(frames: &[RgbImage], dpi: u32, jpeg_quality: u8) -> Result<Document> {
    if frames.is_empty() {
        return Err(TwoUpError::NoPages);
    }

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut kids = Vec::with_capacity(frames.len());
    for frame in frames {
        let page_id = add_raster_page(&mut output, frame, dpi, jpeg_quality, pages_id)?;
        kids.push(Object::Reference(page_id));
    }
    finish_document(&mut output, pages_id, kids);
    Ok(output)
}

/// One output page: a DCTDecode image XObject drawn over the full MediaBox.
fn add_raster_page(
    output: &mut Document,
    frame: &RgbImage,
    dpi: u32,
    jpeg_quality: u8,
    parent: ObjectId,
) -> Result<ObjectId> {
    let (width_px, height_px) = frame.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, jpeg_quality).encode(
        frame.as_raw(),
        width_px,
        height_px,
        ExtendedColorType::Rgb8,
    )?;

    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(i64::from(width_px)));
    image_dict.set("Height", Object::Integer(i64::from(height_px)));
    image_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    image_dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
    // Already JPEG; re-compressing the stream would corrupt it.
    let image_id = output.add_object(Stream {
        dict: image_dict,
        content: jpeg,
        allows_compression: false,
        start_position: None,
    });

    let width_pt = px_to_pt(width_px, dpi);
    let height_pt = px_to_pt(height_px, dpi);

    let content = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q", width_pt, height_pt);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}
