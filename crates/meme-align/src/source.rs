//! Line sources feeding the report parser.
//!
//! The parser never owns the underlying stream directly; it pulls one line
//! at a time through the [`LineSource`] trait. [`LineReader`] adapts any
//! [`BufRead`] implementation, and `str::Lines` works for in-memory reports.

use std::io::{self, BufRead, BufReader, Read};

/// Supplies report lines one at a time.
///
/// Lines are returned without their terminator. `Ok(None)` marks the end of
/// the stream; no pushback or re-reading is ever requested.
pub trait LineSource {
    /// Reads the next line.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying stream.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

impl<L: LineSource + ?Sized> LineSource for Box<L> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

impl LineSource for std::str::Lines<'_> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.next().map(str::to_owned))
    }
}

/// Buffered line reader over any byte stream.
///
/// Strips `\n` and `\r\n` terminators and tracks how many lines have been
/// read, so callers can point at the exact line a problem came from.
///
/// # Examples
///
/// ```
/// use meme_align::{LineReader, LineSource};
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("MEME version 4.11.2\r\n\n"));
/// assert_eq!(reader.read_line().unwrap().as_deref(), Some("MEME version 4.11.2"));
/// assert_eq!(reader.read_line().unwrap().as_deref(), Some(""));
/// assert_eq!(reader.read_line().unwrap(), None);
/// assert_eq!(reader.line_number(), 2);
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    /// 1-based number of the last line read (0 before any reads).
    line_number: usize,
}

impl<R: Read> LineReader<BufReader<R>> {
    /// Wraps `reader` in a [`BufReader`] with the default capacity.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::from_buf_read(BufReader::new(reader))
    }

    /// Wraps `reader` in a [`BufReader`] with the given capacity in bytes.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::from_buf_read(BufReader::with_capacity(capacity, reader))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Uses an already buffered reader as is.
    #[must_use]
    pub fn from_buf_read(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Number of the last line read; 0 before the first read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns a reference to the underlying reader.
    #[must_use]
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Returns a mutable reference to the underlying reader.
    ///
    /// Reading from it directly desynchronizes [`line_number`](Self::line_number).
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes the line reader, returning the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain<L: LineSource>(mut source: L) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = source.read_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn new_reader_starts_at_line_zero() {
        let reader = LineReader::new(Cursor::new(b""));
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn empty_input_is_immediately_exhausted() {
        let mut reader = LineReader::new(Cursor::new(b""));
        assert!(reader.read_line().unwrap().is_none());
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn strips_unix_and_windows_terminators() {
        let lines = drain(LineReader::new(Cursor::new("a\nb\r\nc")));
        assert_eq!(lines, ["a", "b", "c"]);
    }

    #[test]
    fn keeps_interior_whitespace_and_blank_lines() {
        let lines = drain(LineReader::new(Cursor::new("  x  \n\n\t\n")));
        assert_eq!(lines, ["  x  ", "", "\t"]);
    }

    #[test]
    fn counts_lines_read() {
        let mut reader = LineReader::with_capacity(Cursor::new("one\ntwo\nthree\n"), 4);
        reader.read_line().unwrap();
        reader.read_line().unwrap();
        assert_eq!(reader.line_number(), 2);
        reader.read_line().unwrap();
        assert!(reader.read_line().unwrap().is_none());
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn invalid_utf8_surfaces_as_io_error() {
        let mut reader = LineReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        let err = reader.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn str_lines_is_a_source() {
        let lines = drain("first\nsecond\n".lines());
        assert_eq!(lines, ["first", "second"]);
    }

    #[test]
    fn boxed_and_borrowed_sources_forward() {
        let mut inner = "a\nb".lines();
        assert_eq!(drain(&mut inner), ["a", "b"]);

        let boxed: Box<dyn LineSource> = Box::new(LineReader::new(Cursor::new("x\ny\n")));
        assert_eq!(drain(boxed), ["x", "y"]);
    }

    #[test]
    fn into_inner_returns_reader() {
        let reader = LineReader::from_buf_read(Cursor::new(b"data".to_vec()));
        let inner = reader.into_inner();
        assert_eq!(inner.get_ref().as_slice(), b"data");
    }
}
