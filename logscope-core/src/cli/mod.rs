mod diagnostic;
mod run;


pub use diagnostic::*;
pub use run::*;

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logscope",
    version,
    about = "Summarize Combined Log Format access logs: top clients, top user agents, error rates"
)]
pub struct Cli {
    /// Path to the access log file
    pub logfile: PathBuf,

    /// Number of entries in each ranked section
    #[arg(short = 'n', long, value_parser = clap::value_parser!(usize))]
    pub top: Option<usize>,

    /// Report each calendar day separately when the log spans a day or more
    #[arg(long)]
    pub by_day: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Count request paths containing this substring (repeatable; replaces configured list)
    #[arg(short, long = "watch", value_name = "SUBSTRING")]
    pub watch: Vec<String>,

    /// Skip user agent device classification
    #[arg(long)]
    pub no_identify: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
