pub mod decoder;
pub mod encoder;
pub mod frame;

pub use frame::Frame;

/// Number of times an animated sequence repeats before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCount {
    /// Loop forever (value 0 in the Netscape extension).
    Infinite,
    /// Repeat the animation this many times.
    Finite(u16),
}

/// An ordered set of uniformly sized frames plus sequence-level metadata.
/// Serves as both the decoded source and the composited output; the metadata
/// is carried over unchanged between the two.
pub struct Sequence {
    pub frames: Vec<Frame>,
    pub loop_count: LoopCount,
    /// Canvas width shared by every frame.
    pub width: u32,
    /// Canvas height shared by every frame.
    pub height: u32,
}
