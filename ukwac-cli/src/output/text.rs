//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use ukwac_core::ParsedDocument;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &ParsedDocument, _source: &Path) -> Result<()> {
        writeln!(self.writer, "{}", document.text())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
