use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    // Validation
    #[error("report.top must be at least 1")]
    InvalidTop,

    #[error("report.watch entries must not be empty")]
    EmptyWatchPattern,

    #[error("invalid log level '{level}'")]
    InvalidLogLevel { level: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// TOML errors render as multi-line snippets; keep only the first line so
    /// the diagnostic stays on one line.
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        let message = source.message().lines().next().unwrap_or_default().to_string();
        Self::Parse {
            path: path.into(),
            message,
        }
    }
}
