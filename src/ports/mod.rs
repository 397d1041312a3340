// Ports - Interface definitions (contracts)

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Container duration in seconds
    async fn duration(&self, file_path: &Path) -> Result<f64, DomainError>;

    /// Frame size of the first video stream
    async fn resolution(&self, file_path: &Path) -> Result<Resolution, DomainError>;

    /// Whether the file carries any subtitle stream
    async fn has_subtitle(&self, file_path: &Path) -> Result<bool, DomainError>;
}

/// Port for running external programs
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run `program` to completion, capturing stdout and stderr.
    ///
    /// A non-zero exit is reported through [`ProcessOutput::success`], not as
    /// an error; errors are reserved for failing to run the program at all.
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, DomainError>;

    /// Like [`run`](Self::run), but kill the process once `deadline` elapses.
    ///
    /// On expiry the child is killed and reaped before
    /// [`DomainError::Timeout`] is returned.
    async fn run_with_deadline(
        &self,
        program: &str,
        args: &[String],
        deadline: Duration,
    ) -> Result<ProcessOutput, DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Create directory (including parent directories)
    async fn create_directory(&self, path: &Path) -> Result<(), DomainError>;

    /// Delete file
    async fn delete_file(&self, path: &Path) -> Result<(), DomainError>;
}

/// Port for configuration loading
#[async_trait]
pub trait ConfigPort: Send + Sync {
    /// Load configuration; later calls return the snapshot from the first load
    async fn load(&self) -> Result<Arc<AppConfig>, DomainError>;
}
