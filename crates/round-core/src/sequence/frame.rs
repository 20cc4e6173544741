use image::RgbaImage;

/// A single frame of an animated sequence.
pub struct Frame {
    /// Full-canvas RGBA pixel data.
    pub image: RgbaImage,
    /// Display time for this frame, in milliseconds.
    pub duration_ms: u32,
}
