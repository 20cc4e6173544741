use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::sequence::{self, Frame, Sequence};
use crate::{compose, mask};

/// What a completed run produced, for logging and assertions.
#[derive(Debug, Clone, Copy)]
pub struct PipelineSummary {
    pub frame_count: usize,
    pub width: u32,
    pub height: u32,
}

/// Run the whole conversion: decode the input, build the mask once, composite
/// every frame against it, and re-encode with the source's metadata.
pub fn run_pipeline(input: &Path, radius: u32, output: &Path) -> Result<PipelineSummary, Error> {
    let source = sequence::decoder::load(input)?;

    let mask = mask::rounded_mask(source.width, source.height, radius);
    info!(radius, "mask built");

    let frames: Vec<Frame> = source
        .frames
        .iter()
        .map(|frame| Frame {
            image: compose::apply_mask(&frame.image, &mask),
            duration_ms: frame.duration_ms,
        })
        .collect();

    let summary = PipelineSummary {
        frame_count: frames.len(),
        width: source.width,
        height: source.height,
    };

    let rounded = Sequence {
        frames,
        loop_count: source.loop_count,
        width: source.width,
        height: source.height,
    };
    sequence::encoder::save(rounded, output)?;

    info!(
        frame_count = summary.frame_count,
        width = summary.width,
        height = summary.height,
        "pipeline complete"
    );
    Ok(summary)
}
