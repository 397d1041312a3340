//! Single-file format conversion invocation

use std::path::{Path, PathBuf};

/// Fixed encoder settings used by the converter
const TRANSCODE_OUTPUT_ARGS: &[&str] = &[
    "-c:v", "libx264",
    "-preset", "veryfast",
    "-tune", "film",
    "-profile:v", "high",
    "-level:v", "4.0",
    "-crf", "23",
    "-maxrate", "4M",
    "-bufsize", "8M",
    "-g", "50",
    "-keyint_min", "25",
    "-sc_threshold", "40",
    "-threads", "0",
    "-c:a", "aac",
    "-b:a", "128k",
    "-movflags", "+faststart",
];

/// Builder for the converter's ffmpeg arguments
#[derive(Debug, Clone)]
pub struct TranscodeCommand {
    input: PathBuf,
    output: PathBuf,
}

impl TranscodeCommand {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// Build the argument list (without the program name)
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(TRANSCODE_OUTPUT_ARGS.len() + 4);
        args.push("-i".to_string());
        args.push(self.input.to_string_lossy().to_string());
        args.extend(TRANSCODE_OUTPUT_ARGS.iter().map(|s| s.to_string()));
        args.push("-y".to_string());
        args.push(self.output.to_string_lossy().to_string());
        args
    }
}
