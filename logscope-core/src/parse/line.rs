use crate::parse::cursor::Cursor;
use crate::parse::{Field, LogLine, ParseFailure, Request};

/// Parses one Combined Log Format line.
///
/// Surrounding whitespace (including a trailing `\r`) is ignored, as is any
/// text after the user agent.
pub fn parse_line(raw: &str) -> Result<LogLine<'_>, ParseFailure> {
    let line = raw.trim();
    if line.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let mut cursor = Cursor::new(line);

    let remote_addr = cursor.token(Field::RemoteAddr)?;
    let ident = cursor.token(Field::Ident)?;
    let user = cursor.token(Field::User)?;
    let timestamp = cursor.bracketed(Field::Timestamp)?;
    let request = cursor.quoted(Field::Request)?;
    let status = parse_status(cursor.token(Field::Status)?)?;
    let size = parse_size(cursor.token(Field::Size)?)?;
    let referrer = cursor.quoted(Field::Referrer)?;
    let user_agent = cursor.quoted(Field::UserAgent)?;

    Ok(LogLine {
        remote_addr,
        ident: placeholder(ident),
        user: placeholder(user),
        timestamp,
        request: Request::parse(request),
        status,
        size,
        referrer: placeholder(referrer),
        user_agent,
    })
}

/// Byte-level entry point for file input. Lines that are not valid UTF-8 are
/// rejected rather than lossily decoded so counts never merge distinct keys.
pub fn parse_line_bytes(raw: &[u8]) -> Result<LogLine<'_>, ParseFailure> {
    let line = std::str::from_utf8(raw).map_err(|_| ParseFailure::InvalidUtf8)?;
    parse_line(line)
}

fn parse_status(token: &str) -> Result<u16, ParseFailure> {
    if token.len() != 3 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseFailure::InvalidStatus(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ParseFailure::InvalidStatus(token.to_string()))
}

fn parse_size(token: &str) -> Result<Option<u64>, ParseFailure> {
    if token == "-" {
        return Ok(None);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseFailure::InvalidSize(token.to_string()));
    }
    token
        .parse()
        .map(Some)
        .map_err(|_| ParseFailure::InvalidSize(token.to_string()))
}

fn placeholder(value: &str) -> Option<&str> {
    (value != "-").then_some(value)
}
