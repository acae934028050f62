use std::io::{self, Read};

use tracing::warn;

use super::LineSource;
use crate::config::MAX_LINE_LEN;

/// Accumulates the bytes of one logical line.
///
/// A `#` ends the useful content of the line; everything after it up to the
/// newline is swallowed. Content past the length limit is dropped.
#[derive(Debug)]
pub struct LineBuilder {
    bytes: Vec<u8>,
    limit: usize,
    seen_input: bool,
    in_comment: bool,
    truncated: bool,
}

impl LineBuilder {
    pub fn new(max_line_len: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit: max_line_len.saturating_sub(1),
            seen_input: false,
            in_comment: false,
            truncated: false,
        }
    }

    pub fn push(&mut self, byte: u8) {
        self.seen_input = true;
        if self.in_comment {
            return;
        }
        if byte == b'#' {
            self.in_comment = true;
            return;
        }
        if self.bytes.len() >= self.limit {
            self.truncated = true;
            return;
        }
        self.bytes.push(byte);
    }

    /// Whether any byte, kept or not, was pushed since the last `finish`.
    pub fn has_input(&self) -> bool {
        self.seen_input
    }

    /// Returns the finished line and resets for the next one.
    pub fn finish(&mut self) -> String {
        if self.truncated {
            warn!(limit = self.limit, "command line too long, excess discarded");
        }
        let line = String::from_utf8_lossy(&self.bytes).into_owned();
        self.bytes.clear();
        self.seen_input = false;
        self.in_comment = false;
        self.truncated = false;
        line
    }

    pub fn build(max_line_len: usize, raw: &str) -> String {
        let mut builder = Self::new(max_line_len);
        for byte in raw.bytes() {
            if byte == b'\n' {
                break;
            }
            builder.push(byte);
        }
        builder.finish()
    }
}

/// Buffered line reader over any byte stream (script file or piped stdin).
pub struct LineReader<R> {
    inner: Option<R>,
    buffer: Box<[u8]>,
    pos: usize,
    len: usize,
    line: LineBuilder,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_max_line_len(inner, MAX_LINE_LEN)
    }

    pub fn with_max_line_len(inner: R, max_line_len: usize) -> Self {
        Self {
            inner: Some(inner),
            buffer: vec![0; MAX_LINE_LEN].into_boxed_slice(),
            pos: 0,
            len: 0,
            line: LineBuilder::new(max_line_len),
        }
    }

    /// Reads the next logical line. `None` means the input is exhausted.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if self.pos >= self.len && self.fill()? == 0 {
                if self.line.has_input() {
                    return Ok(Some(self.line.finish()));
                }
                return Ok(None);
            }

            let byte = self.buffer[self.pos];
            self.pos += 1;

            if byte == b'\n' {
                return Ok(Some(self.line.finish()));
            }
            self.line.push(byte);
        }
    }

    fn fill(&mut self) -> io::Result<usize> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(0);
        };
        loop {
            match inner.read(&mut self.buffer) {
                Ok(n) => {
                    self.pos = 0;
                    self.len = n;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Drops the underlying stream; later reads report end of input.
    pub fn close(&mut self) {
        self.inner = None;
        self.pos = 0;
        self.len = 0;
    }
}

impl<R: Read> LineSource for LineReader<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        LineReader::next_line(self)
    }

    fn close(&mut self) {
        LineReader::close(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most `chunk` bytes per read to exercise refills.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let end = (self.pos + self.chunk).min(self.data.len());
            let n = (end - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    fn read_all<R: Read>(reader: &mut LineReader<R>) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_lines_without_newlines() {
        let mut reader = LineReader::new(Cursor::new("pwd\ncd /tmp\n"));
        assert_eq!(read_all(&mut reader), vec!["pwd", "cd /tmp"]);
    }

    #[test]
    fn test_final_line_without_newline() {
        let mut reader = LineReader::new(Cursor::new("echo a\necho b"));
        assert_eq!(read_all(&mut reader), vec!["echo a", "echo b"]);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_blank_lines_are_kept_empty() {
        let mut reader = LineReader::new(Cursor::new("\n\nls\n"));
        assert_eq!(read_all(&mut reader), vec!["", "", "ls"]);
    }

    #[test]
    fn test_comment_truncates_line() {
        let mut reader = LineReader::new(Cursor::new("echo hi # greet\n# only\nls#x\n"));
        assert_eq!(read_all(&mut reader), vec!["echo hi ", "", "ls"]);
    }

    #[test]
    fn test_comment_does_not_leak_into_next_line() {
        let mut reader = LineReader::new(Cursor::new("a # b\nc d\n"));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("a "));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("c d"));
    }

    #[test]
    fn test_comment_only_at_eof_is_a_line() {
        let mut reader = LineReader::new(Cursor::new("# trailing"));
        assert_eq!(read_all(&mut reader), vec![""]);
    }

    #[test]
    fn test_refill_across_chunks() {
        let source = Trickle {
            data: b"first line\nsecond # note\nthird".to_vec(),
            pos: 0,
            chunk: 3,
        };
        let mut reader = LineReader::new(source);
        assert_eq!(read_all(&mut reader), vec!["first line", "second ", "third"]);
    }

    #[test]
    fn test_long_line_is_truncated_without_spilling() {
        let long = "x".repeat(20);
        let input = format!("{}\nnext\n", long);
        let mut reader = LineReader::with_max_line_len(Cursor::new(input), 8);
        assert_eq!(read_all(&mut reader), vec!["xxxxxxx", "next"]);
    }

    #[test]
    fn test_default_limit_keeps_1023_bytes() {
        let input = format!("{}\n", "y".repeat(5000));
        let mut reader = LineReader::new(Cursor::new(input));
        let line = reader.next_line().unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN - 1);
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_close_ends_input() {
        let mut reader = LineReader::new(Cursor::new("a\nb\n"));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("a"));
        reader.close();
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_builder_from_edited_line() {
        assert_eq!(LineBuilder::build(MAX_LINE_LEN, "cd /tmp # go"), "cd /tmp ");
        assert_eq!(LineBuilder::build(4, "abcdef"), "abc");
    }
}
