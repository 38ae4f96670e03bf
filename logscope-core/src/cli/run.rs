use crate::analyze::analyze_file;
use crate::cli::Cli;
use crate::config::{ConfigError, LogscopeConfig, load_config};
use crate::render::{RenderError, RenderOptions, render};
use crate::source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 2,
            CliError::Source(_) | CliError::Render(_) => 1,
        }
    }
}

/// Layers the optional config file and command line flags over the defaults.
pub fn resolve_config(cli: &Cli) -> Result<LogscopeConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LogscopeConfig::default(),
    };

    if let Some(top) = cli.top {
        config.report.top = top;
    }
    if cli.by_day {
        config.report.by_day = true;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if !cli.watch.is_empty() {
        config.report.watch = cli.watch.clone();
    }
    if cli.no_identify {
        config.report.identify = false;
    }

    config.validate()?;
    Ok(config)
}

/// Analyzes the log named on the command line and returns the rendered
/// report. Nothing is written on error.
pub fn execute(cli: &Cli, config: &LogscopeConfig) -> Result<String, CliError> {
    let aggregation = analyze_file(&cli.logfile, &config.report)?;
    let output = render(
        &aggregation,
        config.report.format,
        RenderOptions::from(&config.report),
    )?;
    Ok(output)
}
