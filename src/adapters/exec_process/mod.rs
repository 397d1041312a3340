//! Subprocess execution adapter
//!
//! Runs external programs through `tokio::process`, capturing both output
//! streams. The deadline variant kills and reaps the child on expiry.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::engine::display_command;
use crate::ports::*;

/// tokio-based process runner
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    /// Create new process executor
    pub fn new() -> Self {
        Self
    }

    fn command(program: &str, args: &[String]) -> Command {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    fn spawn_error(program: &str, err: std::io::Error) -> DomainError {
        DomainError::Io(std::io::Error::new(
            err.kind(),
            format!("failed to start '{}': {}", program, err),
        ))
    }

    fn collect(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> ProcessOutput {
        ProcessOutput {
            success: status.success(),
            exit_code: status.code(),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
    }
}

/// Drain a child pipe on its own task so a chatty process never blocks on a full pipe
fn drain<R>(pipe: Option<R>) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf).await;
        }
        buf
    })
}

#[async_trait]
impl ExecutePort for ProcessExecutor {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, DomainError> {
        debug!(command = %display_command(program, args), "Running process");

        let output = Self::command(program, args)
            .output()
            .await
            .map_err(|e| Self::spawn_error(program, e))?;

        let result = Self::collect(output.status, output.stdout, output.stderr);
        debug!(success = result.success, code = ?result.exit_code, "Process finished");
        Ok(result)
    }

    async fn run_with_deadline(
        &self,
        program: &str,
        args: &[String],
        deadline: Duration,
    ) -> Result<ProcessOutput, DomainError> {
        debug!(
            command = %display_command(program, args),
            deadline_ms = deadline.as_millis() as u64,
            "Running process with deadline"
        );

        let mut child = Self::command(program, args)
            .spawn()
            .map_err(|e| Self::spawn_error(program, e))?;

        let mut stdout = drain(child.stdout.take());
        let mut stderr = drain(child.stderr.take());

        // pipes stay open while any grandchild holds them, so draining counts too
        let finished = tokio::time::timeout(deadline, async {
            let status = child.wait().await?;
            let out = (&mut stdout).await.unwrap_or_default();
            let err = (&mut stderr).await.unwrap_or_default();
            Ok::<_, std::io::Error>((status, out, err))
        })
        .await;

        match finished {
            Ok(result) => {
                let (status, out, err) = result?;
                Ok(Self::collect(status, out, err))
            }
            Err(_) => {
                warn!(
                    deadline_ms = deadline.as_millis() as u64,
                    "Process exceeded its deadline, killing it"
                );
                // already reaped when only the pipe drain overran
                if !matches!(child.try_wait(), Ok(Some(_))) {
                    if let Err(e) = child.kill().await {
                        warn!("Failed to kill timed out process: {}", e);
                    }
                }
                stdout.abort();
                stderr.abort();
                Err(DomainError::Timeout {
                    seconds: deadline.as_secs_f64(),
                })
            }
        }
    }
}
