// src/normalize.rs
//! Per-line normalization and universal-newline line splitting.

use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

/// 前後の空白を除去し、小文字化した行を返す。
///
/// Whitespace is Unicode `White_Space` plus the information separators
/// U+001C..=U+001F; lowercasing uses the full Unicode case mapping, so the
/// result may be longer than the input (e.g. `İ`).
#[must_use]
pub fn normalize_line(line: &str) -> String {
    line.trim_matches(is_line_space).to_lowercase()
}

fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Iterates over the lines of a UTF-8 reader.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. Terminators are not part
/// of the yielded line. A trailing line without terminator is yielded; a
/// trailing terminator does not produce an extra empty line.
pub struct LineSplitter<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    finished: bool,
}

impl<R: BufRead> LineSplitter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new(), pending: VecDeque::new(), finished: false }
    }

    /// Read the next `\n`-terminated chunk and queue the lines it contains.
    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        let chunk = std::str::from_utf8(&self.buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let (body, terminated) = match chunk.strip_suffix('\n') {
            Some(rest) => (rest.strip_suffix('\r').unwrap_or(rest), true),
            None => (chunk, false),
        };

        // Any '\r' left in the body is a lone CR terminator.
        let mut segments: Vec<&str> = body.split('\r').collect();
        if !terminated && segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        self.pending.extend(segments.into_iter().map(str::to_owned));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for LineSplitter<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.finished {
                return None;
            }
            match self.fill() {
                Ok(true) => {}
                Ok(false) => self.finished = true,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
