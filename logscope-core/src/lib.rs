pub mod aggregate;
mod analyze;
pub mod cli;
pub mod config;
pub mod identity;
pub mod logging;
pub mod parse;
pub mod render;
pub mod source;

pub use aggregate::{AggregateReport, Aggregation, aggregate};
pub use analyze::analyze_file;
pub use parse::{LogLine, ParseFailure, parse_line};
pub use render::render_report;
