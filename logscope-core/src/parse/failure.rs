use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a line was rejected. Never fatal: the aggregation pass tallies these
/// and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("empty line")]
    Empty,

    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error("missing {0} field")]
    MissingField(Field),

    #[error("unterminated {0} field")]
    Unterminated(Field),

    #[error("invalid status code {0:?}")]
    InvalidStatus(String),

    #[error("invalid response size {0:?}")]
    InvalidSize(String),
}

impl ParseFailure {
    pub fn reason(&self) -> SkipReason {
        match self {
            ParseFailure::Empty => SkipReason::Empty,
            ParseFailure::InvalidUtf8 => SkipReason::InvalidUtf8,
            ParseFailure::MissingField(_) => SkipReason::MissingField,
            ParseFailure::Unterminated(_) => SkipReason::UnterminatedField,
            ParseFailure::InvalidStatus(_) => SkipReason::InvalidStatus,
            ParseFailure::InvalidSize(_) => SkipReason::InvalidSize,
        }
    }
}

/// Coarse failure bucket used for skip accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Empty,
    InvalidUtf8,
    MissingField,
    UnterminatedField,
    InvalidStatus,
    InvalidSize,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Empty => "empty",
            SkipReason::InvalidUtf8 => "invalid_utf8",
            SkipReason::MissingField => "missing_field",
            SkipReason::UnterminatedField => "unterminated_field",
            SkipReason::InvalidStatus => "invalid_status",
            SkipReason::InvalidSize => "invalid_size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    RemoteAddr,
    Ident,
    User,
    Timestamp,
    Request,
    Status,
    Size,
    Referrer,
    UserAgent,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::RemoteAddr => "remote address",
            Field::Ident => "ident",
            Field::User => "user",
            Field::Timestamp => "timestamp",
            Field::Request => "request",
            Field::Status => "status",
            Field::Size => "size",
            Field::Referrer => "referrer",
            Field::UserAgent => "user agent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
