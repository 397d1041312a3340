// Domain rules - Business logic and policies

use crate::domain::model::*;

/// Business rules for deciding whether segments must be re-encoded
pub struct ResizePolicy;

impl ResizePolicy {
    /// Whether a source of `width`x`height` has to be scaled to `target`.
    ///
    /// An unset target dimension disables resizing. Otherwise any mismatch
    /// (smaller sources included) or `force_resize` triggers it.
    pub fn needs_resize(width: u32, height: u32, target: &TargetResolution) -> bool {
        if !target.is_constrained() {
            return false;
        }

        target.force_resize || width != target.width || height != target.height
    }

    /// Select the video strategy for a probed source
    pub fn video_strategy(resolution: Resolution, config: &AppConfig) -> VideoStrategy {
        if Self::needs_resize(resolution.width, resolution.height, &config.resolution) {
            VideoStrategy::Reencode {
                width: config.resolution.width,
                height: config.resolution.height,
                crf: config.quality.crf,
                preset: config.quality.preset.clone(),
            }
        } else {
            VideoStrategy::Copy
        }
    }
}

/// Business rules for subtitle carriage
pub struct SubtitlePolicy;

impl SubtitlePolicy {
    /// Subtitles are carried only when requested and actually present
    pub fn carry_subtitles(settings: &SubtitleSettings, has_subtitle: bool) -> bool {
        settings.keep && has_subtitle
    }
}

/// Derive every per-run decision without touching the configuration
pub fn decide(probe: &ProbeResult, config: &AppConfig) -> SplitDecision {
    SplitDecision {
        video: ResizePolicy::video_strategy(probe.resolution, config),
        carry_subtitles: SubtitlePolicy::carry_subtitles(&config.subtitle, probe.has_subtitle),
    }
}
