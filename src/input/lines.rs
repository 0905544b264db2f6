use std::io::BufRead;

/// One line of input, or a marker that the line exceeded the configured bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    TooLong(usize),
}

impl Line {
    pub fn check(text: String, max_len: usize) -> Self {
        if text.len() > max_len {
            Line::TooLong(text.len())
        } else {
            Line::Text(text)
        }
    }
}

/// Reads newline-terminated lines into a growable buffer.
///
/// Over-long lines are consumed whole and surfaced as [`Line::TooLong`], so no
/// remainder of them is ever treated as a separate line.
pub struct LineReader<R> {
    reader: R,
    max_len: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len,
            buf: Vec::new(),
        }
    }

    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> std::io::Result<Option<Line>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }

        if self.buf.len() > self.max_len {
            return Ok(Some(Line::TooLong(self.buf.len())));
        }
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        Ok(Some(Line::Text(text)))
    }
}
