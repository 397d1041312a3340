//! SplitX video splitter
//!
//! Splits a video into fixed-duration segments by driving ffmpeg. Segment
//! length, target resolution, quality, subtitle handling and the processed
//! time window come from a YAML configuration file.
//!
//! # Usage
//!
//! ```bash
//! video-splitter movie.mkv out/
//! video-splitter --config my.yaml --json movie.mkv out/
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use splitx_cli::cli::{commands, SplitCli};

/// Main entry point for the splitter
#[tokio::main]
async fn main() -> Result<()> {
    let cli = SplitCli::parse();
    cli.log.init()?;

    info!("Starting SplitX video splitter");
    commands::split(cli).await
}
