//! CoNLL output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use ukwac_core::ParsedDocument;

/// CoNLL formatter - writes each tree in CoNLL-X columns, blank line between
pub struct ConllFormatter<W: Write> {
    writer: W,
}

impl<W: Write> ConllFormatter<W> {
    /// Create a new CoNLL formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for ConllFormatter<W> {
    fn format_document(&mut self, document: &ParsedDocument, _source: &Path) -> Result<()> {
        write!(self.writer, "{document}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
