//! Single-pass aggregation over parsed lines.
//!
//! raw line
//! parse_line
//! LogLine
//! Aggregator
//! Aggregation (summary, optional per-day breakdown, skip counts)

mod aggregator;
mod daily;
mod report;
mod tally;

#[cfg(test)]
mod tests;

pub use aggregator::*;
pub use daily::*;
pub use report::*;
pub use tally::*;
