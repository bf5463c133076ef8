//! Line scanner over a buffered reader.
//!
//! Tracks a 1-based line counter for error reporting and supports the two
//! scan modes the room grammar needs: pull one line, or accumulate lines
//! until a terminator suffix.

use std::io::BufRead;

use crate::error::ParseError;

/// Stateful line reader with a 1-based line counter.
pub struct LineScanner<R> {
    reader: R,
    line: String,
    number: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            number: 0,
        }
    }

    /// Pull the next line, stripping the trailing newline (and `\r`).
    ///
    /// Returns `Ok(false)` at end of stream. The line counter only
    /// advances when a line was actually read.
    pub fn advance(&mut self) -> Result<bool, ParseError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        self.number += 1;
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(true)
    }

    /// Like [`advance`](Self::advance), but end of stream is a hard error.
    ///
    /// Used wherever the grammar requires more input.
    pub fn must_advance(&mut self) -> Result<(), ParseError> {
        if self.advance()? { Ok(()) } else { Err(ParseError::UnexpectedEof) }
    }

    /// The most recently scanned line, untrimmed.
    pub fn current(&self) -> &str {
        &self.line
    }

    /// 1-based number of the most recently scanned line (0 before any read).
    pub fn line_number(&self) -> usize {
        self.number
    }

    /// Accumulate lines until one ends with `terminator`.
    ///
    /// The terminator is stripped from the final fragment and fragments
    /// are joined with `\n`. Reaching end of stream first is an error.
    pub fn collect_until(&mut self, terminator: &str) -> Result<String, ParseError> {
        let mut fragments = Vec::new();
        loop {
            self.must_advance()?;
            match self.line.strip_suffix(terminator) {
                Some(rest) => {
                    fragments.push(rest.to_string());
                    return Ok(fragments.join("\n"));
                },
                None => fragments.push(self.line.clone()),
            }
        }
    }
}
