// YAML config adapter - Configuration loaded once from a YAML document

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    ffmpeg: RawBinaries,
    video: RawVideo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBinaries {
    ffmpeg_path: String,
    ffprobe_path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVideo {
    max_segment_duration: i64,
    output_name_format: String,
    resolution: RawResolution,
    quality: RawQuality,
    subtitle: RawSubtitle,
    time_range: RawTimeRange,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResolution {
    width: u32,
    height: u32,
    force_resize: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawQuality {
    crf: i64,
    preset: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSubtitle {
    keep: bool,
    encoding: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTimeRange {
    start: f64,
    end: f64,
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

impl RawConfig {
    /// Apply defaults and clamps
    fn normalize(self) -> Result<AppConfig, DomainError> {
        let video = self.video;

        let max_segment_duration = if video.max_segment_duration <= 0 {
            DEFAULT_MAX_SEGMENT_SECS
        } else {
            u32::try_from(video.max_segment_duration).map_err(|_| {
                DomainError::Config(format!(
                    "max_segment_duration {} is too large",
                    video.max_segment_duration
                ))
            })?
        };

        let output_name = OutputTemplate::parse(&or_default(
            video.output_name_format,
            DEFAULT_OUTPUT_NAME_FORMAT,
        ))?;

        // out-of-range values fall back to the default instead of failing
        let crf = match u8::try_from(video.quality.crf) {
            Ok(crf) if (1..=51).contains(&crf) => crf,
            _ => DEFAULT_CRF,
        };

        Ok(AppConfig {
            binaries: BinaryPaths {
                ffmpeg: or_default(self.ffmpeg.ffmpeg_path, "ffmpeg"),
                ffprobe: or_default(self.ffmpeg.ffprobe_path, "ffprobe"),
            },
            segments: SegmentSettings {
                max_segment_duration,
                output_name,
            },
            resolution: TargetResolution {
                width: video.resolution.width,
                height: video.resolution.height,
                force_resize: video.resolution.force_resize,
            },
            quality: QualitySettings {
                crf,
                preset: or_default(video.quality.preset, DEFAULT_PRESET),
            },
            subtitle: SubtitleSettings {
                keep: video.subtitle.keep,
                encoding: or_default(video.subtitle.encoding, DEFAULT_SUBTITLE_ENCODING),
            },
            time_range: TimeRange::new(video.time_range.start, video.time_range.end),
        })
    }
}

/// Parse and normalize a YAML configuration document
pub fn parse_config(content: &str) -> Result<AppConfig, DomainError> {
    let raw: RawConfig = if content.trim().is_empty() {
        RawConfig::default()
    } else {
        serde_yaml::from_str(content)
            .map_err(|e| DomainError::Config(format!("Failed to parse config: {}", e)))?
    };
    raw.normalize()
}

/// YAML configuration adapter
pub struct YamlConfigAdapter {
    path: PathBuf,
    loaded: OnceCell<Arc<AppConfig>>,
}

impl YamlConfigAdapter {
    /// Create new YAML config adapter reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceCell::new(),
        }
    }

    async fn read(&self) -> Result<Arc<AppConfig>, DomainError> {
        info!("Loading configuration from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Config(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let config = parse_config(&content)?;
        debug!(?config, "Configuration loaded");
        Ok(Arc::new(config))
    }
}

impl Default for YamlConfigAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

#[async_trait]
impl ConfigPort for YamlConfigAdapter {
    async fn load(&self) -> Result<Arc<AppConfig>, DomainError> {
        self.loaded
            .get_or_try_init(|| self.read())
            .await
            .map(Arc::clone)
    }
}
