//! FFprobe adapter for media file probing
//!
//! Each fact comes from its own ffprobe invocation; the textual output is
//! parsed by the free functions below so they can be tested without a binary.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    ffprobe_path: String,
    executor: Arc<dyn ExecutePort>,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(ffprobe_path: impl Into<String>, executor: Arc<dyn ExecutePort>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
            executor,
        }
    }

    /// Run ffprobe and return its stdout, mapping any failure to a probe error
    async fn query(&self, what: &str, args: &[&str], file_path: &Path) -> Result<String, DomainError> {
        let mut full_args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        full_args.push(file_path.to_string_lossy().to_string());

        let output = self
            .executor
            .run(&self.ffprobe_path, &full_args)
            .await
            .map_err(|e| DomainError::Probe(format!("failed to query {}: {}", what, e)))?;

        if !output.success {
            return Err(DomainError::Probe(format!(
                "failed to query {} of {}: {}",
                what,
                file_path.display(),
                output.diagnostic()
            )));
        }

        debug!(what, output = %output.stdout.trim(), "ffprobe answered");
        Ok(output.stdout)
    }
}

const DURATION_ARGS: &[&str] = &[
    "-v", "error",
    "-show_entries", "format=duration",
    "-of", "default=noprint_wrappers=1:nokey=1",
];

const RESOLUTION_ARGS: &[&str] = &[
    "-v", "error",
    "-select_streams", "v:0",
    "-show_entries", "stream=width,height",
    "-of", "csv=s=x:p=0",
];

const SUBTITLE_ARGS: &[&str] = &[
    "-v", "error",
    "-select_streams", "s",
    "-show_entries", "stream=codec_type",
    "-of", "csv=p=0",
];

/// Parse the bare `format=duration` value
pub fn parse_duration(output: &str) -> Result<f64, DomainError> {
    let text = output.trim();
    let duration = text
        .parse::<f64>()
        .map_err(|e| DomainError::Probe(format!("unparsable duration '{}': {}", text, e)))?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(DomainError::Probe(format!("invalid duration '{}'", text)));
    }
    Ok(duration)
}

/// Parse `WIDTHxHEIGHT`
pub fn parse_resolution(output: &str) -> Result<Resolution, DomainError> {
    let text = output.trim();
    let parts: Vec<&str> = text.split('x').collect();
    if parts.len() != 2 {
        return Err(DomainError::Probe(format!("unparsable resolution '{}'", text)));
    }

    let width = parts[0]
        .parse::<u32>()
        .map_err(|e| DomainError::Probe(format!("invalid width '{}': {}", parts[0], e)))?;
    let height = parts[1]
        .parse::<u32>()
        .map_err(|e| DomainError::Probe(format!("invalid height '{}': {}", parts[1], e)))?;

    Ok(Resolution { width, height })
}

/// Any line of output means at least one subtitle stream exists
pub fn parse_subtitle_presence(output: &str) -> bool {
    !output.trim().is_empty()
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn duration(&self, file_path: &Path) -> Result<f64, DomainError> {
        let output = self.query("duration", DURATION_ARGS, file_path).await?;
        parse_duration(&output)
    }

    async fn resolution(&self, file_path: &Path) -> Result<Resolution, DomainError> {
        let output = self.query("resolution", RESOLUTION_ARGS, file_path).await?;
        parse_resolution(&output)
    }

    async fn has_subtitle(&self, file_path: &Path) -> Result<bool, DomainError> {
        let output = self.query("subtitle streams", SUBTITLE_ARGS, file_path).await?;
        Ok(parse_subtitle_presence(&output))
    }
}
