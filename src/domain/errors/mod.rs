// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Configuration file unreadable, unparsable or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Probe invocation failed or produced unparsable output
    #[error("Probe failed: {0}")]
    Probe(String),

    /// Requested time window is empty or inverted
    #[error("Invalid time range: start {start:.2}s must be before end {end:.2}s")]
    InvalidRange { start: f64, end: f64 },

    /// Output directory could not be created
    #[error("Failed to create output directory {path}: {message}")]
    Directory { path: String, message: String },

    /// External encoder returned a non-zero exit status
    #[error("{}", encode_message(.segment, .message))]
    Encode {
        segment: Option<usize>,
        message: String,
    },

    /// External encoder exceeded its deadline
    #[error("Media format conversion timed out after {seconds:.3}s")]
    Timeout { seconds: f64 },

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Process spawn or filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn encode_message(segment: &Option<usize>, message: &str) -> String {
    match segment {
        Some(index) => format!("Failed to encode segment {}: {}", index, message),
        None => format!("Encoder failed: {}", message),
    }
}

impl DomainError {
    /// True when the error came from the deadline guard rather than the encoder
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::Timeout { .. })
    }
}
