//! Line scanner that cuts a tagged corpus into raw blocks
//!
//! A block starts at any line (the `<text ...>` opener, treated opaquely)
//! and runs until a line equal to the close tag or end of file. Sentence
//! delimiter lines and blank lines are dropped; every other line is kept
//! verbatim and terminated with `\n`. Lines end at `\n`, `\r\n` or a final
//! `\r`; bytes that are not valid UTF-8 become U+FFFD.

use crate::config::ReaderConfig;
use crate::error::{Result, StreamError};
use std::io::{self, BufRead};

/// Cleaned text of one `<text>` block plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// 0-based position of the block in the corpus
    pub index: usize,
    /// 1-based line number of the opening line
    pub start_line: usize,
    /// 1-based line number of the last line consumed
    pub end_line: usize,
    /// Retained lines, each followed by `\n`
    pub text: String,
    /// Number of retained lines
    pub lines: usize,
    /// Whether the close tag was seen before end of file
    pub terminated: bool,
}

/// Forward-only block reader over a buffered source
#[derive(Debug)]
pub struct BlockScanner<R> {
    reader: R,
    config: ReaderConfig,
    bytes: Vec<u8>,
    buffer: String,
    line_number: usize,
    blocks_read: usize,
}

impl<R: BufRead> BlockScanner<R> {
    /// Create a scanner with the default configuration
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ReaderConfig::default())
    }

    /// Create a scanner with a custom configuration
    pub fn with_config(reader: R, config: ReaderConfig) -> Self {
        Self {
            reader,
            config,
            bytes: Vec::new(),
            buffer: String::new(),
            line_number: 0,
            blocks_read: 0,
        }
    }

    /// Scan the next block, or `None` at end of file
    pub fn next_block(&mut self) -> Result<Option<RawBlock>> {
        // The opening line carries attributes we do not interpret.
        if !self.next_line()? {
            return Ok(None);
        }

        let index = self.blocks_read;
        let start_line = self.line_number;
        let mut text = String::new();
        let mut lines = 0;
        let mut terminated = false;

        while self.next_line()? {
            let line = self.buffer.as_str();
            if line == self.config.close_tag {
                terminated = true;
                break;
            }
            if self.config.is_sentence_tag(line) {
                log::trace!("line {}: skipping sentence delimiter", self.line_number);
                continue;
            }
            if line.is_empty() && self.config.skip_blank_lines {
                log::trace!("line {}: skipping blank line", self.line_number);
                continue;
            }
            text.push_str(line);
            text.push('\n');
            lines += 1;
        }

        self.blocks_read += 1;

        if !terminated {
            if self.config.require_close_tag {
                return Err(StreamError::TruncatedBlock {
                    block: index,
                    line: start_line,
                });
            }
            log::warn!(
                "block {} starting at line {} has no closing tag, using {} lines read before end of file",
                index,
                start_line,
                lines
            );
        }

        log::debug!(
            "scanned block {} (lines {}-{}, {} retained)",
            index,
            start_line,
            self.line_number,
            lines
        );

        Ok(Some(RawBlock {
            index,
            start_line,
            end_line: self.line_number,
            text,
            lines,
            terminated,
        }))
    }

    /// Read one line into the buffer without its terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than ending the
    /// stream.
    fn next_line(&mut self) -> io::Result<bool> {
        self.bytes.clear();
        if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        if self.bytes.last() == Some(&b'\n') {
            self.bytes.pop();
        }
        if self.bytes.last() == Some(&b'\r') {
            self.bytes.pop();
        }

        self.buffer.clear();
        match std::str::from_utf8(&self.bytes) {
            Ok(line) => self.buffer.push_str(line),
            Err(_) => {
                log::warn!(
                    "line {}: invalid UTF-8, replacing undecodable bytes",
                    self.line_number
                );
                self.buffer.push_str(&String::from_utf8_lossy(&self.bytes));
            }
        }
        Ok(true)
    }
}

impl<R> BlockScanner<R> {
    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Number of blocks scanned so far
    pub fn blocks_read(&self) -> usize {
        self.blocks_read
    }

    /// The configuration in use
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for BlockScanner<R> {
    type Item = Result<RawBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}
