// Standard filesystem adapter - File system operations via tokio::fs

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter backed by `tokio::fs`
#[derive(Debug, Clone, Default)]
pub struct FsStdAdapter;

impl FsStdAdapter {
    /// Create new filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for FsStdAdapter {
    async fn create_directory(&self, path: &Path) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| DomainError::Directory {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    async fn delete_file(&self, path: &Path) -> Result<(), DomainError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Io(e)),
        }
    }
}
