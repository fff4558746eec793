//! Error types for the introspection module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while querying an FFmpeg installation.
#[derive(Debug, Error)]
pub enum IntrospectError {
    /// FFmpeg binary not found.
    #[error("FFmpeg not found at path: {path}")]
    ExecutableNotFound { path: PathBuf },

    /// The external process ran but exited abnormally.
    #[error("FFmpeg invocation failed: {reason}")]
    InvocationFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// The invocation exceeded the configured time bound.
    #[error("FFmpeg invocation timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The captured output did not match the expected listing shape.
    #[error("Failed to parse FFmpeg output: {reason}")]
    Parse { reason: String },

    /// I/O error while spawning or reading the process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntrospectError {
    /// Creates a new invocation failure with optional stderr output.
    pub fn invocation_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::InvocationFailed {
            reason: reason.into(),
            stderr,
        }
    }

    /// Creates a new parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}
