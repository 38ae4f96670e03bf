use crate::parse::{Field, ParseFailure, SkipReason, parse_line, parse_line_bytes};
use pretty_assertions::assert_eq;

const CURL_LINE: &str = r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 512 "-" "curl/7.64.1""#;

fn assert_failure(line: &str, expected: ParseFailure) {
    // Act
    let outcome = parse_line(line);

    // Assert
    match outcome {
        Err(failure) => assert_eq!(failure, expected),
        Ok(parsed) => panic!("Expected {expected:?}, got {parsed:?}"),
    }
}

//-----------------------------------------------------------------------------
// Well-formed lines
//-----------------------------------------------------------------------------

#[test]
fn extracts_every_field_from_a_combined_line() {
    // Act
    let line = parse_line(CURL_LINE).unwrap();

    // Assert
    assert_eq!(line.remote_addr, "10.0.0.1");
    assert_eq!(line.ident, None);
    assert_eq!(line.user, None);
    assert_eq!(line.timestamp, "10/Oct/2024:13:55:36 -0700");
    assert_eq!(line.request.method, Some("GET"));
    assert_eq!(line.request.path, "/index.html");
    assert_eq!(line.request.protocol, Some("HTTP/1.1"));
    assert_eq!(line.status, 200);
    assert_eq!(line.size, Some(512));
    assert_eq!(line.referrer, None);
    assert_eq!(line.user_agent, "curl/7.64.1");
}

#[test]
fn keeps_ident_user_and_referrer_when_present() {
    // Arrange
    let raw = r#"192.168.1.1 app frank [09/Dec/2025:11:00:00 -0600] "POST /login HTTP/2.0" 302 - "https://example.com/" "Mozilla/5.0""#;

    // Act
    let line = parse_line(raw).unwrap();

    // Assert
    assert_eq!(line.ident, Some("app"));
    assert_eq!(line.user, Some("frank"));
    assert_eq!(line.size, None);
    assert_eq!(line.referrer, Some("https://example.com/"));
    assert_eq!(line.user_agent, "Mozilla/5.0");
}

#[test]
fn user_agent_with_spaces_and_parentheses_is_taken_verbatim() {
    // Arrange
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    let raw = format!(
        r#"203.0.113.9 - - [09/Dec/2025:11:00:00 -0600] "GET / HTTP/1.1" 200 10 "-" "{ua}""#
    );

    // Act
    let line = parse_line(&raw).unwrap();

    // Assert
    assert_eq!(line.user_agent, ua);
}

#[test]
fn escaped_quotes_stay_inside_the_field() {
    // Arrange
    let raw = r#"10.0.0.2 - - [09/Dec/2025:11:00:00 -0600] "GET /a HTTP/1.1" 200 1 "-" "bot \"quoted\" v1""#;

    // Act
    let line = parse_line(raw).unwrap();

    // Assert
    assert_eq!(line.user_agent, r#"bot \"quoted\" v1"#);
}

#[test]
fn ipv6_and_hostnames_are_accepted_as_remote_address() {
    // Arrange
    let v6 = r#"2001:db8::1 - - [09/Dec/2025:11:00:00 -0600] "GET / HTTP/1.1" 200 1 "-" "ua""#;
    let host = r#"crawler.example.net - - [09/Dec/2025:11:00:00 -0600] "GET / HTTP/1.1" 200 1 "-" "ua""#;

    // Act / Assert
    assert_eq!(parse_line(v6).unwrap().remote_addr, "2001:db8::1");
    assert_eq!(parse_line(host).unwrap().remote_addr, "crawler.example.net");
}

#[test]
fn trailing_carriage_return_and_extra_fields_are_ignored() {
    // Arrange
    let raw = format!("{CURL_LINE} \"extra\" 0.005\r");

    // Act
    let line = parse_line(&raw).unwrap();

    // Assert
    assert_eq!(line.user_agent, "curl/7.64.1");
    assert_eq!(line.status, 200);
}

#[test]
fn timestamp_parses_on_demand() {
    // Act
    let line = parse_line(CURL_LINE).unwrap();
    let ts = line.parsed_timestamp().unwrap();

    // Assert
    assert_eq!(ts.to_rfc3339(), "2024-10-10T13:55:36-07:00");
}

#[test]
fn unparsable_timestamp_does_not_fail_the_line() {
    // Arrange
    let raw = r#"10.0.0.1 - - [yesterday] "GET / HTTP/1.1" 200 1 "-" "ua""#;

    // Act
    let line = parse_line(raw).unwrap();

    // Assert
    assert_eq!(line.timestamp, "yesterday");
    assert!(line.parsed_timestamp().is_none());
}

//-----------------------------------------------------------------------------
// Malformed lines
//-----------------------------------------------------------------------------

#[test]
fn empty_and_blank_lines_fail() {
    assert_failure("", ParseFailure::Empty);
    assert_failure("   \r", ParseFailure::Empty);
}

#[test]
fn garbage_text_fails_on_missing_timestamp() {
    assert_failure("garbage text", ParseFailure::MissingField(Field::User));
    assert_failure(
        "garbage text here",
        ParseFailure::MissingField(Field::Timestamp),
    );
}

#[test]
fn unterminated_timestamp_fails() {
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700 "GET / HTTP/1.1" 200 1 "-" "ua""#,
        ParseFailure::Unterminated(Field::Timestamp),
    );
}

#[test]
fn missing_quotes_fail() {
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] GET / HTTP/1.1 200 1 "-" "ua""#,
        ParseFailure::MissingField(Field::Request),
    );
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] "GET / HTTP/1.1" 200 1"#,
        ParseFailure::MissingField(Field::Referrer),
    );
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] "GET / HTTP/1.1" 200 1 "-""#,
        ParseFailure::MissingField(Field::UserAgent),
    );
}

#[test]
fn truncated_user_agent_fails() {
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] "GET / HTTP/1.1" 200 1 "-" "Mozilla/5.0 (X11"#,
        ParseFailure::Unterminated(Field::UserAgent),
    );
}

#[test]
fn non_numeric_status_fails() {
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] "GET / HTTP/1.1" OK 1 "-" "ua""#,
        ParseFailure::InvalidStatus("OK".to_string()),
    );
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] "GET / HTTP/1.1" 2000 1 "-" "ua""#,
        ParseFailure::InvalidStatus("2000".to_string()),
    );
}

#[test]
fn non_numeric_size_fails() {
    assert_failure(
        r#"10.0.0.1 - - [10/Oct/2024:13:55:36 -0700] "GET / HTTP/1.1" 200 1kb "-" "ua""#,
        ParseFailure::InvalidSize("1kb".to_string()),
    );
}

#[test]
fn invalid_utf8_bytes_fail() {
    // Arrange
    let mut raw = CURL_LINE.as_bytes().to_vec();
    raw[5] = 0xff;

    // Act
    let outcome = parse_line_bytes(&raw);

    // Assert
    assert_eq!(outcome, Err(ParseFailure::InvalidUtf8));
}

#[test]
fn failures_map_to_skip_reasons() {
    assert_eq!(ParseFailure::Empty.reason(), SkipReason::Empty);
    assert_eq!(
        ParseFailure::MissingField(Field::Request).reason(),
        SkipReason::MissingField
    );
    assert_eq!(
        ParseFailure::InvalidStatus("x".into()).reason(),
        SkipReason::InvalidStatus
    );
}
