use crate::config::{ConfigError, LogscopeConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads and validates a TOML config file. Missing sections and keys fall
/// back to their defaults.
pub fn load_config(path: &Path) -> Result<LogscopeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config: LogscopeConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
    config.validate()?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}
