use chrono::{DateTime, FixedOffset};

/// Timestamp layout used between the brackets, e.g. `09/Dec/2025:11:00:00 -0600`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// A single parsed access log record.
///
/// Values borrow from the raw line; `-` placeholders in optional fields are
/// surfaced as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub remote_addr: &'a str,
    pub ident: Option<&'a str>,
    pub user: Option<&'a str>,
    /// Kept opaque; see [`LogLine::parsed_timestamp`].
    pub timestamp: &'a str,
    pub request: Request<'a>,
    pub status: u16,
    pub size: Option<u64>,
    pub referrer: Option<&'a str>,
    pub user_agent: &'a str,
}

impl LogLine<'_> {
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::from_code(self.status)
    }
}

/// The quoted request line, split on whitespace.
///
/// Malformed request lines (`-`, a bare path, probe garbage) keep the whole
/// text as the path and carry no method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    pub method: Option<&'a str>,
    pub path: &'a str,
    pub protocol: Option<&'a str>,
}

impl<'a> Request<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(method), Some(path)) => Request {
                method: Some(method),
                path,
                protocol: parts.next(),
            },
            _ => Request {
                method: None,
                path: raw.trim(),
                protocol: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Other,
}

impl StatusClass {
    pub fn from_code(code: u16) -> Self {
        match code {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Informational => "1xx",
            StatusClass::Success => "2xx",
            StatusClass::Redirection => "3xx",
            StatusClass::ClientError => "4xx",
            StatusClass::ServerError => "5xx",
            StatusClass::Other => "other",
        }
    }
}
