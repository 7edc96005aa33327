//! CLI command implementations for Dice Guess.

pub(crate) mod play;
pub(crate) mod simulate;

mod logging;
mod output;

use clap::ValueEnum;
use thiserror::Error;

/// Output format for the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SimulateFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Free-form failure.
    #[error("{0}")]
    Message(String),
    /// Terminal or file I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Report serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
