use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "round",
    about = "Round the corners of an animated GIF, keeping its timing and loop metadata"
)]
pub struct Cli {
    /// Path to the input animated GIF.
    pub input: PathBuf,

    /// Corner radius in pixels. 0 leaves the frames uncropped.
    pub radius: u32,

    /// Path to write the result (overwritten if it exists).
    pub output: PathBuf,
}
