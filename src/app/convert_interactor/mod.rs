// Convert interactor - Single-file format conversion under a deadline

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::engine::TranscodeCommand;
use crate::ports::*;

/// Deadline applied when the caller does not pick one
pub const DEFAULT_CONVERT_DEADLINE: Duration = Duration::from_secs(15 * 60);

/// Interactor for the convert use case
pub struct ConvertInteractor {
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
    config: Arc<AppConfig>,
}

impl ConvertInteractor {
    /// Create new convert interactor with injected ports
    pub fn new(
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            execute_port,
            fs_port,
            config,
        }
    }

    /// Re-encode `input` into a uniquely named `<uuid>.<extension>` file in `output_dir`.
    ///
    /// Exactly one ffmpeg run, no retry. On timeout or failure the partial
    /// output is removed (best effort) before the error is returned.
    pub async fn convert(
        &self,
        input: &Path,
        output_dir: &Path,
        extension: &str,
        deadline: Duration,
    ) -> Result<PathBuf, DomainError> {
        let extension = normalize_extension(extension)?;
        self.fs_port.create_directory(output_dir).await?;

        let output = output_dir.join(format!("{}.{}", Uuid::new_v4(), extension));
        let command = TranscodeCommand::new(input, &output);
        let args = command.build_args();

        info!(
            deadline_secs = deadline.as_secs_f64(),
            "Converting {} to {}",
            input.display(),
            output.display()
        );

        let result = self
            .execute_port
            .run_with_deadline(&self.config.binaries.ffmpeg, &args, deadline)
            .await;

        let failure = match result {
            Ok(run) if run.success => {
                info!("Conversion finished: {}", output.display());
                return Ok(output);
            }
            Ok(run) => DomainError::Encode {
                segment: None,
                message: run.diagnostic(),
            },
            Err(e @ DomainError::Timeout { .. }) => e,
            Err(e) => DomainError::Encode {
                segment: None,
                message: e.to_string(),
            },
        };

        warn!("Conversion failed, removing partial output: {}", failure);
        if let Err(e) = self.fs_port.delete_file(&output).await {
            warn!("Could not remove {}: {}", output.display(), e);
        }
        Err(failure)
    }
}

/// Accept `mp4` or `.mp4`; reject empty or path-like extensions
pub fn normalize_extension(extension: &str) -> Result<String, DomainError> {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(DomainError::BadArgs("Output format must not be empty".to_string()));
    }
    if trimmed.contains(|c: char| c == '/' || c == '\\') {
        return Err(DomainError::BadArgs(format!(
            "Output format '{}' must be a bare extension",
            extension
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("mp4").unwrap(), "mp4");
        assert_eq!(normalize_extension(".mkv").unwrap(), "mkv");
        assert_eq!(normalize_extension(" webm ").unwrap(), "webm");
        assert!(normalize_extension("").is_err());
        assert!(normalize_extension(".").is_err());
        assert!(normalize_extension("../mp4").is_err());
    }

    #[test]
    fn test_default_deadline_is_fifteen_minutes() {
        assert_eq!(DEFAULT_CONVERT_DEADLINE.as_secs(), 900);
    }
}
