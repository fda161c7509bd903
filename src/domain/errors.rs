//! # Domain Errors
//!
//! 実行全体を中断する致命的エラーの分類
//!
//! Per-file upload failures are not represented here: they are captured in
//! [`UploadOutcome`](crate::domain::entities::upload_outcome::UploadOutcome)
//! and never unwind past the submission step.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for a playlist upload run
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("The supplied path '{path}' is not a usable playlist source: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    #[error("The supplied path '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("Login failed: {0}")]
    Authentication(String),

    #[error("Failed to initialize HTTP client: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for playlist upload operations
pub type Result<T> = std::result::Result<T, PlaylistError>;

impl PlaylistError {
    /// 不正な入力パスのエラーを作成
    pub fn invalid_input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PlaylistError::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
