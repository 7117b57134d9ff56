//! Image XObject creation
//!
//! Each source image becomes one Image XObject. JPEG bytes pass through
//! unchanged as a DCTDecode stream; PNG decodes to raw samples that are
//! deflated into a FlateDecode stream, with a separate SMask stream when
//! the source has an alpha channel.

use std::io::Write;

use flate2::{Compression, write::ZlibEncoder};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::types::{ImageFormat, ImageInput, Result};

pub(crate) fn create_image_xobject(doc: &mut Document, input: &ImageInput) -> Result<ObjectId> {
    match input.format() {
        ImageFormat::Jpeg => embed_jpeg(doc, input),
        ImageFormat::Png => embed_png(doc, input),
    }
}

/// Embed JPEG bytes directly; the JPEG codec is the stream filter.
fn embed_jpeg(doc: &mut Document, input: &ImageInput) -> Result<ObjectId> {
    let color_space: &[u8] = if input.image().color().has_color() {
        b"DeviceRGB"
    } else {
        b"DeviceGray"
    };

    let dict = image_dict(input.width_px(), input.height_px(), color_space, b"DCTDecode");

    // Already compressed: a second deflate pass would corrupt the data.
    Ok(doc.add_object(
        Stream::new(dict, input.bytes().to_vec()).with_compression(false),
    ))
}

/// Embed a PNG as deflated raw samples, preserving alpha via SMask.
fn embed_png(doc: &mut Document, input: &ImageInput) -> Result<ObjectId> {
    let image = input.image();
    let color = image.color();

    let (samples, color_space): (Vec<u8>, &[u8]) = if color.has_color() {
        (image.to_rgb8().into_raw(), b"DeviceRGB")
    } else {
        (image.to_luma8().into_raw(), b"DeviceGray")
    };

    let mut dict = image_dict(
        input.width_px(),
        input.height_px(),
        color_space,
        b"FlateDecode",
    );

    if color.has_alpha() {
        let alpha: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
        let smask_dict = image_dict(
            input.width_px(),
            input.height_px(),
            b"DeviceGray",
            b"FlateDecode",
        );
        let smask_id = doc.add_object(flate_stream(smask_dict, &alpha)?);
        dict.set("SMask", Object::Reference(smask_id));
    }

    Ok(doc.add_object(flate_stream(dict, &samples)?))
}

fn image_dict(width: u32, height: u32, color_space: &[u8], filter: &[u8]) -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(i64::from(width))),
        ("Height", Object::Integer(i64::from(height))),
        ("BitsPerComponent", Object::Integer(8)),
        ("ColorSpace", Object::Name(color_space.to_vec())),
        ("Filter", Object::Name(filter.to_vec())),
    ])
}

fn flate_stream(dict: Dictionary, data: &[u8]) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    let content = encoder.finish()?;
    Ok(Stream::new(dict, content).with_compression(false))
}
