//! Combined Log Format parsing.
//!
//! A line looks like:
//!
//! ```text
//! 10.0.0.1 - frank [10/Oct/2024:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 512 "-" "curl/7.64.1"
//! ```
//!
//! Fields are split by their fixed ordering and quoting: three bare tokens, a
//! bracketed timestamp, the quoted request line, status and size tokens, then
//! the quoted referrer and user agent. Parsing borrows from the input line so
//! the aggregation pass only allocates when it sees a new key.

mod cursor;
mod failure;
mod line;
mod types;

#[cfg(test)]
mod tests;

pub use failure::*;
pub use line::*;
pub use types::*;
