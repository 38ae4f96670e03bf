use crate::config::ConfigError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_WATCH: &[&str] = &["admin-ajax.php"];
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Resolved configuration: defaults, then the optional TOML file, then CLI
/// flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogscopeConfig {
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// Entries per ranked section.
    pub top: usize,

    /// Split the report per calendar day when the log spans a day or more.
    pub by_day: bool,

    pub format: OutputFormat,

    /// Request path substrings to count.
    pub watch: Vec<String>,

    /// Classify user agents into device classes.
    pub identify: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top: crate::render::DEFAULT_TOP_N,
            by_day: false,
            format: OutputFormat::Text,
            watch: DEFAULT_WATCH.iter().map(|s| s.to_string()).collect(),
            identify: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// error|warn|info|debug|trace|off; `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl LogscopeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.top == 0 {
            return Err(ConfigError::InvalidTop);
        }
        if self.report.watch.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::EmptyWatchPattern);
        }
        if LevelFilter::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel {
                level: self.logging.level.clone(),
            });
        }
        Ok(())
    }
}
