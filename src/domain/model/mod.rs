// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::errors::DomainError;

/// Default maximum segment length in seconds
pub const DEFAULT_MAX_SEGMENT_SECS: u32 = 10;
/// Default constant rate factor for re-encoded segments
pub const DEFAULT_CRF: u8 = 18;
/// Default x264 preset
pub const DEFAULT_PRESET: &str = "medium";
/// Default segment name template
pub const DEFAULT_OUTPUT_NAME_FORMAT: &str = "segment_%03d";
/// Default subtitle text encoding
pub const DEFAULT_SUBTITLE_ENCODING: &str = "UTF-8";
/// Trailing segments shorter than this are not written
pub const MIN_SEGMENT_SECS: f64 = 0.5;

/// Locations of the external media binaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryPaths {
    pub ffmpeg: String,
    pub ffprobe: String,
}

impl Default for BinaryPaths {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

/// Target frame size; a zero dimension means "no constraint"
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TargetResolution {
    pub width: u32,
    pub height: u32,
    pub force_resize: bool,
}

impl TargetResolution {
    /// Whether both dimensions are set
    pub fn is_constrained(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Re-encode quality settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualitySettings {
    pub crf: u8,
    pub preset: String,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            crf: DEFAULT_CRF,
            preset: DEFAULT_PRESET.to_string(),
        }
    }
}

/// Subtitle handling options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtitleSettings {
    pub keep: bool,
    pub encoding: String,
}

impl Default for SubtitleSettings {
    fn default() -> Self {
        Self {
            keep: false,
            encoding: DEFAULT_SUBTITLE_ENCODING.to_string(),
        }
    }
}

/// Requested processing window in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TimeRange {
    /// Start offset, never negative
    pub start: f64,
    /// End offset; `<= 0` means "to the end of the input"
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: start.max(0.0),
            end,
        }
    }

    /// The whole input
    pub fn full() -> Self {
        Self::default()
    }

    /// Resolve against the probed duration, returning `(start, end)`
    pub fn resolve(&self, total_duration: f64) -> Result<(f64, f64), DomainError> {
        let end = if self.end > 0.0 && self.end <= total_duration {
            self.end
        } else {
            total_duration
        };
        let start = self.start;

        if start >= end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok((start, end))
    }
}

/// printf-style segment name template holding exactly one integer directive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct OutputTemplate {
    prefix: String,
    suffix: String,
    width: usize,
    zero_pad: bool,
}

impl OutputTemplate {
    /// Parse a template such as `segment_%03d`
    pub fn parse(template: &str) -> Result<Self, DomainError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut directive: Option<(usize, bool)> = None;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let target = if directive.is_some() { &mut suffix } else { &mut prefix };
            if c != '%' {
                target.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                target.push('%');
                continue;
            }

            let mut spec = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    spec.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            match chars.next() {
                Some('d') if directive.is_none() => {
                    let zero_pad = spec.starts_with('0');
                    let width = if spec.is_empty() {
                        0
                    } else {
                        spec.parse::<usize>().map_err(|e| {
                            DomainError::Config(format!(
                                "Invalid width in output name format '{}': {}",
                                template, e
                            ))
                        })?
                    };
                    directive = Some((width, zero_pad));
                }
                Some('d') => {
                    return Err(DomainError::Config(format!(
                        "Output name format '{}' must contain exactly one index directive",
                        template
                    )));
                }
                other => {
                    return Err(DomainError::Config(format!(
                        "Unsupported directive '%{}{}' in output name format '{}'",
                        spec,
                        other.map(String::from).unwrap_or_default(),
                        template
                    )));
                }
            }
        }

        let (width, zero_pad) = directive.ok_or_else(|| {
            DomainError::Config(format!(
                "Output name format '{}' has no index directive (e.g. %03d)",
                template
            ))
        })?;

        Ok(Self {
            prefix,
            suffix,
            width,
            zero_pad,
        })
    }

    /// Render the file stem for a 1-based segment index
    pub fn render(&self, index: usize) -> String {
        let number = if self.zero_pad {
            format!("{:0width$}", index, width = self.width)
        } else {
            format!("{:width$}", index, width = self.width)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }

    /// Render a file name, appending the extension (including its dot) verbatim
    pub fn file_name(&self, index: usize, extension: &str) -> String {
        format!("{}{}", self.render(index), extension)
    }
}

impl Default for OutputTemplate {
    fn default() -> Self {
        Self {
            prefix: "segment_".to_string(),
            suffix: String::new(),
            width: 3,
            zero_pad: true,
        }
    }
}

impl fmt::Display for OutputTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escape = |s: &str| s.replace('%', "%%");
        let zero = if self.zero_pad { "0" } else { "" };
        let width = if self.width > 0 {
            self.width.to_string()
        } else {
            String::new()
        };
        write!(
            f,
            "{}%{}{}d{}",
            escape(&self.prefix),
            zero,
            width,
            escape(&self.suffix)
        )
    }
}

impl From<OutputTemplate> for String {
    fn from(template: OutputTemplate) -> Self {
        template.to_string()
    }
}

/// Segmentation settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSettings {
    pub max_segment_duration: u32,
    pub output_name: OutputTemplate,
}

impl Default for SegmentSettings {
    fn default() -> Self {
        Self {
            max_segment_duration: DEFAULT_MAX_SEGMENT_SECS,
            output_name: OutputTemplate::default(),
        }
    }
}

/// Fully defaulted application configuration, read-only after load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppConfig {
    pub binaries: BinaryPaths,
    pub segments: SegmentSettings,
    pub resolution: TargetResolution,
    pub quality: QualitySettings,
    pub subtitle: SubtitleSettings,
    pub time_range: TimeRange,
}

/// Frame size reported by the probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Facts gathered about one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub duration: f64,
    pub resolution: Resolution,
    pub has_subtitle: bool,
}

/// One planned output clip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// 1-based position in the plan
    pub index: usize,
    pub start: f64,
    pub duration: f64,
}

impl Segment {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Ordered, contiguous segments covering the effective range
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SegmentPlan {
    pub segments: Vec<Segment>,
}

impl SegmentPlan {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of all segment durations
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

/// How the video stream of a segment is produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStrategy {
    /// Stream-copy the source video untouched
    Copy,
    /// Re-encode with scale and pad to the exact target frame
    Reencode {
        width: u32,
        height: u32,
        crf: u8,
        preset: String,
    },
}

/// Per-run decisions derived from config and probe facts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitDecision {
    pub video: VideoStrategy,
    pub carry_subtitles: bool,
}

/// A segment that was written to disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrittenSegment {
    pub index: usize,
    pub start: f64,
    pub duration: f64,
    pub path: PathBuf,
}

/// Summary of a completed split
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub probe: ProbeResult,
    pub decision: SplitDecision,
    pub segments: Vec<WrittenSegment>,
    pub completed_at: DateTime<Utc>,
}

/// Captured result of one external process run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Diagnostic text for error reports
    pub fn diagnostic(&self) -> String {
        let status = match self.exit_code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{}\n{}", status, stderr)
        }
    }
}
