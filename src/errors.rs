use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact file {} is unreadable: {reason}", path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Failed to save contacts to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::CorruptStore {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Persist {
            path: path.into(),
            source,
        }
    }
}
