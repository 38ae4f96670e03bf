use anyhow::Context;
use clap::Parser;
use logscope_core::cli::{Cli, execute, report_error, resolve_config};
use logscope_core::logging::init_logging;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            report_error(&err);
            return ExitCode::from(2);
        }
    };

    init_logging(&config.logging.level);

    let output = match execute(&cli, &config) {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            report_error(&err);
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(err) = write_report(&output) {
        report_error(&format!("{err:#}"));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn write_report(output: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report to stdout")
}
