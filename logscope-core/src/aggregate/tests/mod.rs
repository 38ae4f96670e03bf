
/// Builds a well-formed line with the fields the aggregation tests vary.
pub(super) fn line(ip: &str, ts: &str, path: &str, status: u16, ua: &str) -> String {
    format!(r#"{ip} - - [{ts}] "GET {path} HTTP/1.1" {status} 128 "-" "{ua}""#)
}

pub(super) const TS: &str = "09/Dec/2025:11:00:00 -0600";
