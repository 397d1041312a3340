//! Command implementations

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::adapters::YamlConfigAdapter;
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::{ConvertCli, SplitCli};
use crate::domain::errors::DomainError;
use crate::domain::model::SplitReport;

async fn load_container(config_path: &str) -> Result<DefaultAppContainer> {
    let config_port = YamlConfigAdapter::new(config_path);
    DefaultAppContainer::load(&config_port)
        .await
        .with_context(|| format!("Failed to load configuration from {}", config_path))
}

/// Execute the split command
pub async fn split(cli: SplitCli) -> Result<()> {
    info!("Starting split operation");
    info!("Input: {}", cli.input);
    info!("Output directory: {}", cli.output_dir);

    let container = load_container(&cli.config).await?;
    let report = container
        .split_interactor()
        .split(Path::new(&cli.input), Path::new(&cli.output_dir))
        .await
        .context("Video split failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize split report to JSON")?;
        println!("{}", json);
    } else {
        println!("{}", split_summary(&report));
    }

    info!("Split operation completed successfully");
    Ok(())
}

/// Execute the convert command.
///
/// An informational line is printed for every outcome; failures are also
/// returned so the process exits non-zero.
pub async fn convert(cli: ConvertCli) -> Result<()> {
    info!("Starting convert operation");
    info!("Input: {}", cli.input);
    info!("Format: {}", cli.format);

    let container = load_container(&cli.config).await?;
    let deadline = Duration::from_secs(cli.timeout_secs);

    let result = container
        .convert_interactor()
        .convert(
            Path::new(&cli.input),
            Path::new(&cli.output_dir),
            &cli.format,
            deadline,
        )
        .await;

    println!("{}", convert_outcome(&result, deadline));

    match result {
        Ok(output) => {
            info!("Convert operation completed successfully: {}", output.display());
            Ok(())
        }
        Err(e) => {
            error!("Convert operation failed: {}", e);
            Err(anyhow::Error::new(e).context("Media format conversion failed"))
        }
    }
}

/// One-line summary printed after a successful split
pub fn split_summary(report: &SplitReport) -> String {
    format!(
        "video split complete: {} segment(s) written to {}",
        report.segments.len(),
        report.output_dir.display()
    )
}

/// Informational line describing a conversion outcome
pub fn convert_outcome(result: &Result<std::path::PathBuf, DomainError>, deadline: Duration) -> String {
    match result {
        Ok(output) => format!("media format conversion success: {}", output.display()),
        Err(DomainError::Timeout { .. }) => format!(
            "media format conversion timeout after {}",
            format_deadline(deadline)
        ),
        Err(e) => format!("cmd err: {}", e),
    }
}

fn format_deadline(deadline: Duration) -> String {
    let secs = deadline.as_secs();
    if secs >= 60 && secs % 60 == 0 {
        format!("{} minutes", secs / 60)
    } else if secs > 0 {
        format!("{} seconds", secs)
    } else {
        format!("{} ms", deadline.as_millis())
    }
}
