//! Command-line argument definitions shared by both binaries

use clap::Args;

use crate::adapters::{init_logging, LogLevel};
use crate::domain::errors::DomainError;

/// Logging options
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, env = "SPLITX_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl LogArgs {
    /// Install the tracing subscriber described by these options
    pub fn init(&self) -> Result<(), DomainError> {
        let level = LogLevel::parse(&self.log_level)?;
        init_logging(level, self.log_json);
        Ok(())
    }
}
