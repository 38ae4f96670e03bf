
pub(super) fn line(ip: &str, status: u16, ua: &str) -> String {
    format!(
        r#"{ip} - - [09/Dec/2025:11:00:00 -0600] "GET /index.html HTTP/1.1" {status} 512 "-" "{ua}""#
    )
}
