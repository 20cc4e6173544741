use image::{GrayImage, Rgba, RgbaImage};

/// Composite one frame against the shared mask.
///
/// Starts from a fully transparent canvas: where the mask is opaque the source
/// pixel is copied verbatim, where it is transparent the canvas stays
/// transparent, and intermediate coverage scales the source alpha
/// proportionally. Stateless; frames can be processed in any order.
///
/// Panics if the frame and mask dimensions differ. Every frame of a decoded
/// sequence shares the canvas size the mask was built for, so a mismatch is a
/// programming error rather than an input condition.
pub fn apply_mask(image: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    assert!(
        image.dimensions() == mask.dimensions(),
        "frame {}x{} does not match mask {}x{}",
        image.width(),
        image.height(),
        mask.width(),
        mask.height(),
    );

    let mut out = RgbaImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let coverage = mask.get_pixel(x, y)[0];
        if coverage == 0 {
            continue;
        }
        let Rgba([r, g, b, a]) = *pixel;
        let a = if coverage == 255 {
            a
        } else {
            ((u32::from(a) * u32::from(coverage) + 127) / 255) as u8
        };
        out.put_pixel(x, y, Rgba([r, g, b, a]));
    }
    out
}

#[cfg(test)]
mod tests {
    use image::Luma;

    use crate::mask::rounded_mask;

    use super::*;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 29 % 256) as u8, (y * 53 % 256) as u8, 128, 255])
        })
    }

    #[test]
    fn opaque_mask_copies_frame_verbatim() {
        let frame = gradient(8, 6);
        let mask = GrayImage::from_pixel(8, 6, Luma([255]));
        assert_eq!(apply_mask(&frame, &mask), frame);
    }

    #[test]
    fn zero_radius_mask_is_identity() {
        let frame = gradient(16, 12);
        let mask = rounded_mask(16, 12, 0);
        assert_eq!(apply_mask(&frame, &mask), frame);
    }

    #[test]
    fn transparent_mask_yields_transparent_canvas() {
        let frame = gradient(8, 6);
        let mask = GrayImage::from_pixel(8, 6, Luma([0]));
        let out = apply_mask(&frame, &mask);
        assert!(out.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn partial_coverage_scales_alpha() {
        let frame = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        let mask = GrayImage::from_pixel(4, 4, Luma([128]));
        let out = apply_mask(&frame, &mask);
        // color channels untouched, alpha scaled by coverage
        assert_eq!(*out.get_pixel(1, 1), Rgba([200, 100, 50, 128]));
    }

    #[test]
    fn masked_corners_become_transparent() {
        let frame = gradient(32, 32);
        let mask = rounded_mask(32, 32, 8);
        let out = apply_mask(&frame, &mask);
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(31, 31), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(16, 16), *frame.get_pixel(16, 16));
    }

    #[test]
    #[should_panic(expected = "does not match mask")]
    fn mismatched_dimensions_panic() {
        let frame = gradient(8, 8);
        let mask = GrayImage::from_pixel(4, 4, Luma([255]));
        apply_mask(&frame, &mask);
    }
}
