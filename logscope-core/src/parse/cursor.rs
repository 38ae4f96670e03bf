use crate::parse::{Field, ParseFailure};

/// Left-to-right scanner over a single log line.
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Next whitespace-delimited token.
    pub(crate) fn token(&mut self, field: Field) -> Result<&'a str, ParseFailure> {
        self.rest = self.rest.trim_start();
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Err(ParseFailure::MissingField(field));
        }

        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(token)
    }

    /// Text between `[` and the next `]`.
    pub(crate) fn bracketed(&mut self, field: Field) -> Result<&'a str, ParseFailure> {
        self.rest = self.rest.trim_start();
        let Some(body) = self.rest.strip_prefix('[') else {
            return Err(ParseFailure::MissingField(field));
        };
        let Some(end) = body.find(']') else {
            return Err(ParseFailure::Unterminated(field));
        };
        if end == 0 {
            return Err(ParseFailure::MissingField(field));
        }

        self.rest = &body[end + 1..];
        Ok(&body[..end])
    }

    /// Text between double quotes. Backslash escapes are skipped over but left
    /// in place, so the value is the literal text from the line.
    pub(crate) fn quoted(&mut self, field: Field) -> Result<&'a str, ParseFailure> {
        self.rest = self.rest.trim_start();
        let Some(body) = self.rest.strip_prefix('"') else {
            return Err(ParseFailure::MissingField(field));
        };

        let bytes = body.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'"' => {
                    self.rest = &body[i + 1..];
                    return Ok(&body[..i]);
                }
                _ => i += 1,
            }
        }

        Err(ParseFailure::Unterminated(field))
    }
}
