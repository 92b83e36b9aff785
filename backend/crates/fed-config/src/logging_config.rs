use crate::{DEFAULT_LOG_DIRECTORY, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// `[logging]`: console by default, a file under `dir` when `file` is set
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Ignored for file output
    pub colored: bool,
    pub file: Option<String>,
    /// Relative to the config directory
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: DEFAULT_LOG_DIRECTORY.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Full log file path, or `None` for console logging
    pub fn file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| config_dir.join(&self.dir).join(name))
    }
}
