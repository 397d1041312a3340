//! Per-segment ffmpeg invocation

use std::path::{Path, PathBuf};

use crate::domain::model::{Segment, SplitDecision, VideoStrategy};
use crate::engine::format_seconds;

/// Encoder used whenever a segment must be resized
pub const SEGMENT_VIDEO_CODEC: &str = "libx264";
/// Mux queue bound large enough for reordered streams
pub const MAX_MUXING_QUEUE_SIZE: u32 = 1024;

/// Builder for the ffmpeg arguments that cut one segment.
///
/// Segments are video-only: audio is always dropped. Subtitles are mapped and
/// stream-copied only when the split decision says to carry them.
#[derive(Debug, Clone)]
pub struct SegmentCommand {
    input: PathBuf,
    output: PathBuf,
    segment: Segment,
    decision: SplitDecision,
}

impl SegmentCommand {
    /// Create a command for `segment` of `input`, writing to `output`
    pub fn new(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        segment: Segment,
        decision: &SplitDecision,
    ) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            segment,
            decision: decision.clone(),
        }
    }

    /// Build the argument list (without the program name)
    pub fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            "-i".to_string(),
            self.input.to_string_lossy().to_string(),
            "-ss".to_string(),
            format_seconds(self.segment.start),
            "-t".to_string(),
            format_seconds(self.segment.duration),
            "-map".to_string(),
            "0:v:0".to_string(),
            "-an".to_string(),
        ];

        if self.decision.carry_subtitles {
            args.extend(["-map", "0:s:0?", "-c:s", "copy"].map(String::from));
        } else {
            args.push("-sn".to_string());
        }

        match &self.decision.video {
            VideoStrategy::Reencode {
                width,
                height,
                crf,
                preset,
            } => {
                args.push("-vf".to_string());
                args.push(scale_and_pad_filter(*width, *height));
                args.extend(["-c:v", SEGMENT_VIDEO_CODEC, "-movflags", "+faststart"].map(String::from));
                args.push("-preset".to_string());
                args.push(preset.clone());
                args.push("-crf".to_string());
                args.push(crf.to_string());
            }
            VideoStrategy::Copy => {
                args.extend(["-c:v", "copy"].map(String::from));
            }
        }

        args.extend(["-avoid_negative_ts", "make_zero", "-max_muxing_queue_size"].map(String::from));
        args.push(MAX_MUXING_QUEUE_SIZE.to_string());
        args.push("-y".to_string());
        args.push(self.output.to_string_lossy().to_string());

        args
    }
}

/// Fit inside `width`x`height` keeping aspect ratio, then letterbox to the exact size
pub fn scale_and_pad_filter(width: u32, height: u32) -> String {
    format!(
        "scale={w}:{h}:force_original_aspect_ratio=decrease,pad={w}:{h}:(ow-iw)/2:(oh-ih)/2",
        w = width,
        h = height
    )
}
