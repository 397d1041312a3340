//! Shared test doubles for the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use splitx_cli::domain::model::{ProcessOutput, Resolution};
use splitx_cli::ports::{ExecutePort, ProbePort};
use splitx_cli::DomainError;

/// Probe returning fixed facts
pub struct FakeProbe {
    pub duration: f64,
    pub resolution: Resolution,
    pub has_subtitle: bool,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeProbe {
    pub fn new(duration: f64, width: u32, height: u32, has_subtitle: bool) -> Self {
        Self {
            duration,
            resolution: Resolution { width, height },
            has_subtitle,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProbePort for FakeProbe {
    async fn duration(&self, _file_path: &Path) -> Result<f64, DomainError> {
        self.calls.lock().unwrap().push("duration");
        Ok(self.duration)
    }

    async fn resolution(&self, _file_path: &Path) -> Result<Resolution, DomainError> {
        self.calls.lock().unwrap().push("resolution");
        Ok(self.resolution)
    }

    async fn has_subtitle(&self, _file_path: &Path) -> Result<bool, DomainError> {
        self.calls.lock().unwrap().push("has_subtitle");
        Ok(self.has_subtitle)
    }
}

/// Records every invocation; optionally fails the n-th one (1-based)
pub struct RecordingExecutor {
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
    pub fail_on: Option<usize>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(call),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExecutePort for RecordingExecutor {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, DomainError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((program.to_string(), args.to_vec()));

        if self.fail_on == Some(calls.len()) {
            return Ok(ProcessOutput {
                success: false,
                exit_code: Some(1),
                stdout: String::new(),
                stderr: "Conversion failed!".to_string(),
            });
        }
        Ok(ProcessOutput {
            success: true,
            exit_code: Some(0),
            ..ProcessOutput::default()
        })
    }

    async fn run_with_deadline(
        &self,
        program: &str,
        args: &[String],
        _deadline: Duration,
    ) -> Result<ProcessOutput, DomainError> {
        self.run(program, args).await
    }
}

/// True when `key` is immediately followed by `value`
pub fn has_pair(args: &[String], key: &str, value: &str) -> bool {
    args.windows(2).any(|w| w[0] == key && w[1] == value)
}

/// Write an executable shell script
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// ffprobe stand-in answering the three queries the splitter makes
#[cfg(unix)]
pub fn fake_ffprobe(dir: &Path, duration: &str, resolution: &str, subtitles: bool) -> PathBuf {
    let subtitle_line = if subtitles { "echo subtitle" } else { ":" };
    write_script(
        dir,
        "ffprobe",
        &format!(
            r#"case "$*" in
  *format=duration*) echo "{}" ;;
  *stream=width,height*) echo "{}" ;;
  *stream=codec_type*) {} ;;
  *) exit 1 ;;
esac"#,
            duration, resolution, subtitle_line
        ),
    )
}

/// ffmpeg stand-in that writes its argument list into the output file (last argument)
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path) -> PathBuf {
    write_script(dir, "ffmpeg", r#"for last; do :; done
echo "$*" > "$last""#)
}
