// std imports
use std::{
    io::{BufRead, ErrorKind},
    num::NonZeroUsize,
};

// third-party imports
use memchr::memchr;

// local imports
use crate::error::{Error, Result};

// ---

/// Reads `\n` or `\r\n` terminated lines into a reusable growable buffer.
///
/// The buffer starts with the given capacity and grows as long lines require,
/// but never accepts a line longer than the given limit.
pub struct LineReader<R> {
    name: String,
    inner: R,
    buf: Vec<u8>,
    limit: usize,
    line: u64,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a new line reader.
    ///
    /// The `name` is used in error messages only.
    pub fn new(name: String, inner: R, capacity: NonZeroUsize, limit: NonZeroUsize) -> Self {
        Self {
            name,
            inner,
            buf: Vec::with_capacity(capacity.get()),
            limit: limit.get(),
            line: 0,
        }
    }

    /// Returns the number of the last line returned by [`next_line`](Self::next_line), starting from 1.
    #[inline]
    pub fn line_number(&self) -> u64 {
        self.line
    }

    /// Returns the name of the source.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the next line without its terminator.
    ///
    /// Returns `Ok(None)` at the end of input. A last line without a terminator is still returned.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();

        let line = self.line + 1;
        let mut eof = true;
        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }
            eof = false;

            let (n, done) = match memchr(b'\n', available) {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            };
            self.buf.extend_from_slice(&available[..n]);
            self.inner.consume(n);

            if done {
                break;
            }
            // One extra byte may be a `\r` of a `\r\n` terminator split between reads.
            if self.buf.len() > self.limit + 1 {
                return Err(self.too_long(line));
            }
        }

        if eof {
            return Ok(None);
        }

        self.line = line;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        if self.buf.len() > self.limit {
            return Err(self.too_long(line));
        }

        Ok(Some(&self.buf))
    }

    fn too_long(&self, line: u64) -> Error {
        Error::LineTooLong {
            input: self.name.clone(),
            line,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests;
