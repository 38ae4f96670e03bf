//! Read-only access to the log file.
//!
//! The file handle lives inside [`RawLines`] and is closed when the iterator
//! is dropped, whether the pass completes or stops on an error.

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{path}: no such file")]
    NotFound { path: PathBuf },

    #[error("{path}: not a regular file")]
    NotAFile { path: PathBuf },

    #[error("{path}: cannot open: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}: read failed after line {line}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: io::Error,
    },
}

pub struct LogSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl LogSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;
        if !metadata.is_file() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(self) -> RawLines<BufReader<File>> {
        RawLines::new(self.reader)
    }
}

/// Splits a byte stream into lines on `\n`, `\r\n` or a lone `\r`.
///
/// Lines are yielded as bytes without their terminator; decoding is left to
/// the parser.
pub struct RawLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<Vec<u8>>,
    done: bool,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                let mut chunk = self.buf.as_slice();
                if let Some(rest) = chunk.strip_suffix(b"\n") {
                    chunk = rest;
                }
                if let Some(rest) = chunk.strip_suffix(b"\r") {
                    chunk = rest;
                }
                self.pending
                    .extend(chunk.split(|b| *b == b'\r').map(<[u8]>::to_vec));
                self.pending.pop_front().map(Ok)
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
