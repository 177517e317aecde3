//! Error types for logger construction

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent a logger from being constructed at all
///
/// Per-channel problems never surface here; they are reported as
/// [`Diagnostic`](crate::diagnostics::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to determine the current working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("failed to create log directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid logger configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LoggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_creation_message_names_path() {
        let err = LoggerError::DirectoryCreation {
            path: PathBuf::from("/readonly/log"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.contains("/readonly/log"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
