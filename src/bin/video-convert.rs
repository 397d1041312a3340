//! SplitX format converter
//!
//! Re-encodes one video into `<output_dir>/<uuid>.<format>` with a fixed
//! H.264/AAC parameter set, killing ffmpeg after the deadline.
//!
//! # Usage
//!
//! ```bash
//! video-convert input.avi out/ mp4
//! video-convert --timeout-secs 60 input.avi out/ mkv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use splitx_cli::cli::{commands, ConvertCli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ConvertCli::parse();
    cli.log.init()?;

    info!("Starting SplitX format converter");
    commands::convert(cli).await
}
