//! PDF assembly - one page per image, in input order
//!
//! The assembler drives the export:
//! 1. Resolve the usable drawing area from the options
//! 2. Embed each image as an XObject and place it on its own page
//! 3. Finalize the page tree, catalog and trailer, serialize to bytes

mod page;
mod xobject;

use lopdf::{Dictionary, Document, Object};

use crate::layout;
use crate::options::ExportOptions;
use crate::types::*;

/// Export an ordered image list as a PDF, one page per image.
///
/// Assembly is CPU-bound, so it runs on the blocking pool.
pub async fn export(images: Vec<ImageInput>, options: ExportOptions) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || export_sync(&images, &options)).await?
}

/// Synchronous export. The buffer is returned only once every page has been
/// added; any failure aborts the whole call with no partial output.
pub fn export_sync(images: &[ImageInput], options: &ExportOptions) -> Result<Vec<u8>> {
    options.validate()?;
    if images.is_empty() {
        return Err(AlbumError::NoImages);
    }

    // The page box keeps the portrait base dimensions; landscape is a
    // /Rotate attribute while layout runs in the rotated space.
    let (page_width, page_height) = options.page_size.dimensions_pt();
    let usable = layout::usable_area(options)?;

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut page_refs = Vec::new();

    for image in images {
        let placement = layout::place_image(&usable, image.width_px(), image.height_px())
            .ok_or_else(|| AlbumError::EmptyImage {
                name: image.name().to_string(),
            })?;

        let image_id = xobject::create_image_xobject(&mut doc, image)?;
        let page_id = page::render_page(
            &mut doc,
            pages_id,
            image_id,
            page_width,
            page_height,
            options.orientation,
            &placement,
        );
        page_refs.push(Object::Reference(page_id));
    }

    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
