use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::Delay;
use tracing::info;

use crate::error::Error;
use crate::sequence::{LoopCount, Sequence};

/// Encode a sequence as an animated GIF at `path`, carrying the loop count and
/// per-frame durations over verbatim. The first frame anchors the file and the
/// rest follow in sequence order.
///
/// The file is created (or truncated) before encoding starts; a failure partway
/// through leaves whatever was already written.
pub fn save(sequence: Sequence, path: &Path) -> Result<(), Error> {
    info!(
        ?path,
        frame_count = sequence.frames.len(),
        "encoding sequence"
    );

    let file = File::create(path).map_err(|e| Error::encode(path, e))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));

    let repeat = match sequence.loop_count {
        LoopCount::Infinite => Repeat::Infinite,
        LoopCount::Finite(n) => Repeat::Finite(n),
    };
    encoder
        .set_repeat(repeat)
        .map_err(|e| Error::encode(path, e))?;

    let frames = sequence.frames.into_iter().map(|frame| {
        let delay = Delay::from_numer_denom_ms(frame.duration_ms, 1);
        image::Frame::from_parts(frame.image, 0, 0, delay)
    });
    encoder
        .encode_frames(frames)
        .map_err(|e| Error::encode(path, e))?;

    info!(?path, "sequence encoded");
    Ok(())
}
