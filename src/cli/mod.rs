//! CLI module for SplitX
//!
//! This module handles command-line argument parsing and command execution
//! for both binaries.

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::LogArgs;

/// Split a video into fixed-length, video-only segments
#[derive(Parser, Debug)]
#[command(name = "video-splitter")]
#[command(about = "Split a video into fixed-duration segments using ffmpeg")]
#[command(version)]
pub struct SplitCli {
    /// Input video file path
    pub input: String,

    /// Directory the segments are written to (created if missing)
    pub output_dir: String,

    /// YAML configuration file
    #[arg(long, env = "SPLITX_CONFIG", default_value = crate::adapters::DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Print the split report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Convert one video to another container/format
#[derive(Parser, Debug)]
#[command(name = "video-convert")]
#[command(about = "Re-encode a video into a new format using ffmpeg")]
#[command(version)]
pub struct ConvertCli {
    /// Input video file path
    pub input: String,

    /// Directory the converted file is written to
    pub output_dir: String,

    /// Target format extension (e.g. mp4)
    pub format: String,

    /// YAML configuration file
    #[arg(long, env = "SPLITX_CONFIG", default_value = crate::adapters::DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Conversion deadline in seconds
    #[arg(long, default_value_t = 900, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    #[command(flatten)]
    pub log: LogArgs,
}
