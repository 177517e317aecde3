//! Logger configuration
//!
//! The crate never reads a configuration file itself. `LoggerConfig` is meant
//! to be embedded in (or parsed from a fragment of) the host application's own
//! configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the log directory lives relative to the base (working) directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogPlacement {
    /// `<base>/log`
    Subdirectory,
    /// `<parent of base>/log`
    #[default]
    ParentSibling,
}

impl LogPlacement {
    /// Map the constructor flag onto a placement
    pub fn from_is_subdirectory(is_subdirectory: bool) -> Self {
        if is_subdirectory {
            LogPlacement::Subdirectory
        } else {
            LogPlacement::ParentSibling
        }
    }

    /// Resolve the log directory for `base`
    ///
    /// A base without a parent (filesystem root) is its own parent.
    pub fn resolve(&self, base: &Path, directory_name: &str) -> PathBuf {
        match self {
            LogPlacement::Subdirectory => base.join(directory_name),
            LogPlacement::ParentSibling => base.parent().unwrap_or(base).join(directory_name),
        }
    }
}

/// Logger settings supplied by the embedding application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Which directory-resolution strategy to use (default: parent sibling)
    #[serde(default)]
    pub placement: LogPlacement,

    /// Name of the log directory (default: "log")
    #[serde(default = "default_directory_name")]
    pub directory_name: String,

    /// Delete dated log files older than this many days when a logger is created.
    /// Unset keeps every file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u64>,
}

fn default_directory_name() -> String {
    "log".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            placement: LogPlacement::default(),
            directory_name: default_directory_name(),
            retention_days: None,
        }
    }
}

impl LoggerConfig {
    /// Config equivalent to `FileLogger::new(is_subdirectory)`
    pub fn with_subdirectory(is_subdirectory: bool) -> Self {
        Self {
            placement: LogPlacement::from_is_subdirectory(is_subdirectory),
            ..Self::default()
        }
    }

    /// Parse a TOML fragment owned by the host application
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Log directory for the given base directory
    pub fn log_dir(&self, base: &Path) -> PathBuf {
        self.placement.resolve(base, &self.directory_name)
    }
}
