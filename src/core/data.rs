//! Stream loader: whitespace/comma separated floats, zero-allocation parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseNumberError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadFloat(String),
}

impl Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadFloat(text) => {
                write!(f, "line {}: invalid number '{}'", self.line, text)
            }
        }
    }
}
impl Error for ParseNumberError {}

// --- Helpers ---

/// Rewrite U+2212 (unicode minus) into an ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseNumberError> {
    let bad = || ParseNumberError {
        line,
        kind: ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Fast numeric ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read every number from `src`.  Fields split on commas or whitespace,
/// blank lines and `#` comment lines are skipped.  May return an empty
/// vector; callers decide whether that is an error.
pub fn read_numbers<R: Read>(src: R) -> Result<Vec<f64>, ParseNumberError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<f64>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseNumberError {
                line: line_no,
                kind: ParseErrorKind::Io(e),
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if buf.is_empty() || buf[0] == b'#' {
            continue;
        }

        for field in buf.split(|&b| b == b',' || b.is_ascii_whitespace()) {
            if field.is_empty() {
                continue;
            }
            data.push(parse_f64(field, line_no)?);
        }
    }
    Ok(data)
}
