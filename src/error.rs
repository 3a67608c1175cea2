//! Error types for chart generation

use chart_manifest::ManifestError;
use std::path::PathBuf;

/// Exit status reserved for a missing chart descriptor
pub const MISSING_DESCRIPTOR_EXIT_CODE: u8 = 1;

/// Exit status for every other failure
pub const FAILURE_EXIT_CODE: u8 = 2;

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum ChartGenError {
    #[error("Invalid chart version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Invalid mutating webhook toggle {0:?}: expected \"true\" or \"false\"")]
    InvalidWebhookToggle(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to run `{command}`: {source}")]
    CommandUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("`{command}` produced output that is not valid UTF-8")]
    InvalidOutput { command: String },

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Chart descriptor not found: {0:?}")]
    MissingChartDescriptor(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartGenError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            ChartGenError::MissingChartDescriptor(_) => MISSING_DESCRIPTOR_EXIT_CODE,
            _ => FAILURE_EXIT_CODE,
        }
    }
}

/// Result type for chart generation
pub type ChartGenResult<T> = Result<T, ChartGenError>;
