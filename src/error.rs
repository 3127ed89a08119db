use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("No folder is being watched")]
    NoTargetConfigured,

    #[error("Watched folder not found: {path}")]
    TargetNotFound { path: PathBuf },

    #[error("Cannot access folder: {path} ({reason})")]
    AccessDenied { path: PathBuf, reason: String },

    #[error("Secret store error: {message}")]
    SecretStore { message: String },

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failures of a single mount-recovery attempt. Each variant maps onto a
/// user-visible failure kind; none of them escape a check cycle.
#[derive(Error, Debug)]
pub enum MountError {
    #[error("Server disconnected and credentials are not configured")]
    CredentialsMissing,

    #[error("Mount command failed: {output}")]
    CommandFailed { output: String },

    #[error("Volume did not reappear after remount: {volume}")]
    VerificationFailed { volume: PathBuf },

    #[error("Secret store error: {message}")]
    Secret { message: String },

    #[error("Share mount helper not found: {tool}")]
    OpenerNotFound { tool: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WatchError>;
