//! Output page construction

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::layout::Placement;
use crate::types::Orientation;

/// Create one output page holding a single placed image.
///
/// The MediaBox always carries the portrait base dimensions; a landscape
/// request becomes a 90 degree page rotation, and the placement coordinates
/// are already expressed in the rotated space.
pub(crate) fn render_page(
    doc: &mut Document,
    parent_pages_id: ObjectId,
    image_id: ObjectId,
    page_width_pt: f32,
    page_height_pt: f32,
    orientation: Orientation,
    placement: &Placement,
) -> ObjectId {
    let content = placement_command("Im0", placement);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );
    if orientation == Orientation::Landscape {
        page_dict.set("Rotate", Object::Integer(90));
    }
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    doc.add_object(page_dict)
}

/// Generate the content stream command placing the image.
///
/// Image XObject space is the unit square, so the transform scales it up to
/// the draw size and translates to the placement origin.
fn placement_command(xobject_name: &str, placement: &Placement) -> String {
    let r = &placement.rect;
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        r.width, r.height, r.x, r.y, xobject_name
    )
}
