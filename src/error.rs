//! Error types shared across the task engine

use std::path::PathBuf;

use thiserror::Error;

/// Rejected task fields or Pomodoro schedule parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Task name cannot be empty")]
    EmptyName,

    #[error("Unknown priority '{0}' (expected LOW, MID or HIGH)")]
    UnknownPriority(String),

    #[error("Duration must be a positive number of minutes, got {0}")]
    NonPositiveMinutes(f64),

    #[error("Break time must be a positive number of minutes, got {0}")]
    NonPositiveBreak(f64),

    #[error("Invalid number of Pomodoro cycles: {0} (expected a positive whole number)")]
    NonPositiveCycles(i64),
}

/// Failures reading, writing or decoding the persisted task document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Error decoding task document: {0}")]
    Decode(String),

    #[error("Malformed task record #{index} in '{bucket}': {reason}")]
    MalformedRecord {
        bucket: String,
        index: usize,
        reason: String,
    },

    #[error("Failed to encode task document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(bucket: &str, index: usize, reason: impl ToString) -> Self {
        StorageError::MalformedRecord {
            bucket: bucket.to_string(),
            index,
            reason: reason.to_string(),
        }
    }
}

/// Top-level error for task operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
