//! Page layout for image placement
//!
//! Pure geometry: resolve the usable drawing area of a page and compute
//! where an image of given pixel dimensions lands on it. Nothing here
//! touches the PDF writer.

use crate::options::ExportOptions;
use crate::types::{AlbumError, Result};

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Which usable-area axis limits the scaled image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Image is relatively wider than the usable area: width is filled
    WidthBound,
    /// Image is relatively taller (or equal): height is filled
    HeightBound,
}

/// Final position and size of an image on its page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Draw rectangle in page coordinates (points)
    pub rect: Rect,
    pub fit: FitMode,
}

/// Resolve the usable drawing area for the given options.
///
/// Page dimensions are taken with orientation applied, then the margin is
/// subtracted symmetrically from both axes. A margin that consumes the whole
/// page on either axis is rejected.
pub fn usable_area(options: &ExportOptions) -> Result<Rect> {
    let (width, height) = options
        .page_size
        .dimensions_with_orientation(options.orientation);
    let usable_width = width - 2.0 * options.margin_pt;
    let usable_height = height - 2.0 * options.margin_pt;
    if usable_width <= 0.0 || usable_height <= 0.0 {
        return Err(AlbumError::NoDrawableArea {
            margin_pt: options.margin_pt,
            width,
            height,
        });
    }
    Ok(Rect::new(
        options.margin_pt,
        options.margin_pt,
        usable_width,
        usable_height,
    ))
}

/// Compute the placement of an image within the usable area.
///
/// The result is the largest axis-aligned rectangle of the source aspect
/// ratio that fits entirely within `usable`, centered on both axes.
/// Returns `None` when either pixel dimension is zero; the caller decides
/// how to report that.
pub fn place_image(usable: &Rect, width_px: u32, height_px: u32) -> Option<Placement> {
    if width_px == 0 || height_px == 0 {
        return None;
    }

    let image_aspect = width_px as f32 / height_px as f32;
    let page_aspect = usable.width / usable.height;

    let (fit, draw_width, draw_height) = if image_aspect > page_aspect {
        (FitMode::WidthBound, usable.width, usable.width / image_aspect)
    } else {
        (
            FitMode::HeightBound,
            usable.height * image_aspect,
            usable.height,
        )
    };

    let x = usable.x + (usable.width - draw_width) / 2.0;
    let y = usable.y + (usable.height - draw_height) / 2.0;

    Some(Placement {
        rect: Rect::new(x, y, draw_width, draw_height),
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, PageSize};

    const EPSILON: f32 = 0.05;

    fn options(page_size: PageSize, orientation: Orientation, margin_pt: f32) -> ExportOptions {
        ExportOptions {
            page_size,
            orientation,
            margin_pt,
            ..Default::default()
        }
    }

    #[test]
    fn test_usable_area_a4_portrait() {
        let opts = options(PageSize::A4, Orientation::Portrait, 40.0);
        let usable = usable_area(&opts).unwrap();
        assert_eq!(usable, Rect::new(40.0, 40.0, 515.0, 762.0));
    }

    #[test]
    fn test_usable_area_letter_landscape() {
        let opts = options(PageSize::Letter, Orientation::Landscape, 0.0);
        let usable = usable_area(&opts).unwrap();
        assert_eq!(usable, Rect::new(0.0, 0.0, 792.0, 612.0));
    }

    #[test]
    fn test_usable_area_rejects_oversized_margin() {
        // 2 * 300 = 600pt eats the whole 595pt A4 width
        let opts = options(PageSize::A4, Orientation::Portrait, 300.0);
        match usable_area(&opts) {
            Err(AlbumError::NoDrawableArea { margin_pt, .. }) => {
                assert_eq!(margin_pt, 300.0);
            }
            other => panic!("expected NoDrawableArea, got {:?}", other),
        }
    }

    #[test]
    fn test_wide_image_fits_to_width() {
        // 800x600 on A4 portrait with 40pt margin: usable 515x762,
        // image aspect 1.333 > page aspect 0.676
        let opts = options(PageSize::A4, Orientation::Portrait, 40.0);
        let usable = usable_area(&opts).unwrap();
        let placement = place_image(&usable, 800, 600).unwrap();

        assert_eq!(placement.fit, FitMode::WidthBound);
        assert!((placement.rect.width - 515.0).abs() < EPSILON);
        assert!((placement.rect.height - 386.25).abs() < EPSILON);
        assert!((placement.rect.x - 40.0).abs() < EPSILON);
        // centered vertically: 40 + (762 - 386.25) / 2
        assert!((placement.rect.y - 227.875).abs() < EPSILON);
    }

    #[test]
    fn test_tall_image_fits_to_height() {
        // 600x800 on Letter landscape with no margin: usable 792x612,
        // image aspect 0.75 < page aspect 1.294
        let opts = options(PageSize::Letter, Orientation::Landscape, 0.0);
        let usable = usable_area(&opts).unwrap();
        let placement = place_image(&usable, 600, 800).unwrap();

        assert_eq!(placement.fit, FitMode::HeightBound);
        assert!((placement.rect.height - 612.0).abs() < EPSILON);
        assert!((placement.rect.width - 459.0).abs() < EPSILON);
    }

    #[test]
    fn test_placement_fits_and_preserves_aspect() {
        let opts = options(PageSize::A4, Orientation::Portrait, 40.0);
        let usable = usable_area(&opts).unwrap();

        for &(w, h) in &[
            (1u32, 1u32),
            (800, 600),
            (600, 800),
            (4000, 30),
            (30, 4000),
            (515, 762),
            (1920, 1080),
        ] {
            let placement = place_image(&usable, w, h).unwrap();
            let rect = placement.rect;

            assert!(rect.width <= usable.width + EPSILON, "{}x{}", w, h);
            assert!(rect.height <= usable.height + EPSILON, "{}x{}", w, h);

            let source_aspect = w as f32 / h as f32;
            let drawn_aspect = rect.width / rect.height;
            assert!(
                (drawn_aspect - source_aspect).abs() / source_aspect < 1e-3,
                "aspect drifted for {}x{}: {} vs {}",
                w,
                h,
                drawn_aspect,
                source_aspect
            );
        }
    }

    #[test]
    fn test_placement_is_centered() {
        let opts = options(PageSize::Letter, Orientation::Portrait, 25.0);
        let usable = usable_area(&opts).unwrap();

        for &(w, h) in &[(800u32, 600u32), (600, 800), (100, 100)] {
            let rect = place_image(&usable, w, h).unwrap().rect;
            let left_gap = rect.x - usable.x;
            let right_gap = usable.right() - rect.right();
            let bottom_gap = rect.y - usable.y;
            let top_gap = usable.top() - rect.top();
            assert!((left_gap - right_gap).abs() < EPSILON, "{}x{}", w, h);
            assert!((bottom_gap - top_gap).abs() < EPSILON, "{}x{}", w, h);
        }
    }

    #[test]
    fn test_matching_aspect_fills_usable_area() {
        // Equal aspect ratios take the height-bound branch and fill both axes
        let usable = Rect::new(10.0, 10.0, 500.0, 750.0);
        let placement = place_image(&usable, 500, 750).unwrap();
        assert_eq!(placement.fit, FitMode::HeightBound);
        assert!((placement.rect.width - 500.0).abs() < EPSILON);
        assert!((placement.rect.height - 750.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_pixel_dimension_has_no_placement() {
        let usable = Rect::new(0.0, 0.0, 500.0, 700.0);
        assert!(place_image(&usable, 0, 600).is_none());
        assert!(place_image(&usable, 800, 0).is_none());
    }
}
