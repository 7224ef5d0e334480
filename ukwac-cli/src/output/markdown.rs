//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use ukwac_core::ParsedDocument;

/// Markdown formatter - outputs sentences as a numbered list per corpus file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    current_source: Option<PathBuf>,
    sentence_count: usize,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_source: None,
            sentence_count: 0,
            token_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &ParsedDocument, source: &Path) -> Result<()> {
        if self.current_source.as_deref() != Some(source) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", source.display())?;
            writeln!(self.writer)?;
            self.current_source = Some(source.to_path_buf());
        }

        self.sentence_count += 1;
        self.token_count += document.tree().len();
        writeln!(self.writer, "{}. {}", self.sentence_count, document.text())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {}, tokens: {}*",
            self.sentence_count, self.token_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
