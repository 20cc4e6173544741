mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // The conversion contract is exit code 1 for usage errors, not
            // clap's default 2. Help and version output keep exiting 0.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    info!(input = ?cli.input, radius = cli.radius, output = ?cli.output, "rounding corners");

    let summary = round_core::pipeline::run_pipeline(&cli.input, cli.radius, &cli.output)
        .context("conversion failed")?;

    info!(
        frame_count = summary.frame_count,
        width = summary.width,
        height = summary.height,
        output = ?cli.output,
        "wrote rounded sequence"
    );

    Ok(())
}
