use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageDecoder};
use tracing::{debug, info};

use crate::error::Error;
use crate::sequence::{Frame, LoopCount, Sequence};

/// Netscape/Animexts application extension introducers (extension marker,
/// application label size, label). Either one carries the loop count.
const LOOP_EXTENSIONS: [&[u8]; 2] = [b"\x21\xff\x0bNETSCAPE2.0", b"\x21\xff\x0bANIMEXTS1.0"];

/// Decode an animated GIF into a [`Sequence`].
///
/// Frames come back at full canvas size in RGBA, with sub-frame placement and
/// disposal already applied. The whole file is read up front, so the input
/// handle is released before any compositing or encoding starts.
pub fn load(path: &Path) -> Result<Sequence, Error> {
    info!(?path, "decoding sequence");

    let bytes = fs::read(path).map_err(|e| Error::decode(path, e))?;

    let decoder =
        GifDecoder::new(Cursor::new(bytes.as_slice())).map_err(|e| Error::decode(path, e))?;
    let (width, height) = decoder.dimensions();

    let raw_frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| Error::decode(path, e))?;
    if raw_frames.is_empty() {
        return Err(Error::missing_metadata(path, "frame"));
    }

    let loop_count = read_loop_count(path, &bytes)?;

    let frames: Vec<Frame> = raw_frames
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            Frame {
                duration_ms: (numer + denom / 2) / denom,
                image: frame.into_buffer(),
            }
        })
        .collect();

    info!(
        frame_count = frames.len(),
        width,
        height,
        ?loop_count,
        "sequence decoded"
    );

    Ok(Sequence {
        frames,
        loop_count,
        width,
        height,
    })
}

/// Read the loop count from the Netscape extension.
///
/// The decoder reports `Repeat::Finite(0)` both when the extension is absent
/// and when it says "loop forever", so absence is detected on the raw stream
/// rather than inferred from the decoded value.
fn read_loop_count(path: &Path, bytes: &[u8]) -> Result<LoopCount, Error> {
    let has_extension = LOOP_EXTENSIONS
        .iter()
        .any(|ext| bytes.windows(ext.len()).any(|window| window == *ext));
    if !has_extension {
        return Err(Error::missing_metadata(path, "loop"));
    }

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut reader = options
        .read_info(Cursor::new(bytes))
        .map_err(|e| Error::decode(path, e))?;

    // The extension can sit between any two blocks; drain the stream so
    // `repeat()` reflects whatever the file carries.
    while reader
        .read_next_frame()
        .map_err(|e| Error::decode(path, e))?
        .is_some()
    {}

    let loop_count = match reader.repeat() {
        gif::Repeat::Infinite | gif::Repeat::Finite(0) => LoopCount::Infinite,
        gif::Repeat::Finite(n) => LoopCount::Finite(n),
    };
    debug!(?loop_count, "loop metadata read");
    Ok(loop_count)
}
