use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Logo not found at {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
