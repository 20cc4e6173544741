use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use tracing::debug;

const OPAQUE: Luma<u8> = Luma([255]);

/// Build the shared corner mask: an opaque rectangle spanning the full canvas
/// with transparent quarter-circle cutouts of `radius` pixels at each corner.
///
/// A radius larger than half the smaller dimension is clamped to it, the same
/// clipping rule rounded-rectangle drawing primitives apply. A radius of 0
/// yields a fully opaque mask.
///
/// The mask is binary (0 or 255) and deterministic: identical inputs produce
/// bit-identical output.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");

    let mut mask = GrayImage::new(width, height);
    let radius = radius.min(width / 2).min(height / 2);
    debug!(width, height, radius, "building corner mask");

    if radius == 0 {
        draw_filled_rect_mut(&mut mask, Rect::at(0, 0).of_size(width, height), OPAQUE);
        return mask;
    }

    // Opaque cross between the corner cutouts. Either bar can vanish when the
    // radius reaches half a dimension.
    if width > 2 * radius {
        draw_filled_rect_mut(
            &mut mask,
            Rect::at(radius as i32, 0).of_size(width - 2 * radius, height),
            OPAQUE,
        );
    }
    if height > 2 * radius {
        draw_filled_rect_mut(
            &mut mask,
            Rect::at(0, radius as i32).of_size(width, height - 2 * radius),
            OPAQUE,
        );
    }

    // Four corner discs complete the rounded rectangle.
    let r = radius as i32;
    let right = width as i32 - 1 - r;
    let bottom = height as i32 - 1 - r;
    for center in [(r, r), (right, r), (r, bottom), (right, bottom)] {
        draw_filled_circle_mut(&mut mask, center, r, OPAQUE);
    }

    mask
}
