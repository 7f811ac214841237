//! Error types for passforge.
//!
//! Generation and copy failures are kept as separate enums because the
//! interactive form handles them locally, while the one-shot command lets
//! them bubble up into [`AppError`].

use thiserror::Error;

/// Why a generation attempt was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Password length must be between 8 and 32 characters (got {0}).")]
    InvalidLength(i64),

    #[error("Please select at least one character type.")]
    EmptyPool,
}

/// Why a copy to the clipboard did not happen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("No password to copy.")]
    NothingToCopy,

    #[error("Failed to copy password to clipboard: {0}")]
    Clipboard(String),
}

/// Top-level application error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
