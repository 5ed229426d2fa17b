//! Error types for getthis operations.
//!
//! This module defines [`GetThisError`], the error type shared by the tracker,
//! the writers, and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is reported to the user; none stop the tracking loop
//! - [`GetThisError::NoActiveDocument`] is a warning, everything else an error
//! - Use `anyhow::Error` (via `GetThisError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for getthis operations.
#[derive(Debug, Error)]
pub enum GetThisError {
    /// The host has no saved document focused in an editor column.
    #[error("No active editor found.")]
    NoActiveDocument,

    /// The OS identifier is not one of the supported platforms.
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },

    /// Reading or writing a shell startup file failed.
    #[error("Failed to update {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Permission to edit the shell startup file is no longer recorded.
    #[error("Not allowed to edit {path}; THIS is no longer updated")]
    ConsentRequired { path: PathBuf },

    /// The user's shell has no known startup file syntax.
    #[error("Unsupported shell: {shell}")]
    UnsupportedShell { shell: String },

    /// The OS command that persists the user variable failed.
    #[error("Command failed: {command}: {message}")]
    PlatformError { command: String, message: String },

    /// Failed to parse the configuration store.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values or arguments.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GetThisError {
    /// Whether this condition is reported as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NoActiveDocument)
    }

    /// Guidance shown next to the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::UnsupportedShell { .. } => Some(
                "Supported shells are bash, zsh and fish. Set SHELL to one of them.".to_string(),
            ),
            Self::UnsupportedPlatform { .. } => {
                Some("Supported platforms are Windows, macOS and Linux.".to_string())
            }
            Self::ConsentRequired { .. } => Some(
                "Run `getthis consent --grant`, or restart watching to be asked again."
                    .to_string(),
            ),
            Self::FileIo { path, .. } => Some(format!(
                "Make sure {} exists and is writable; it is never created automatically.",
                path.display()
            )),
            _ => None,
        }
    }
}

/// Result type alias for getthis operations.
pub type Result<T> = std::result::Result<T, GetThisError>;
