//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use ukwac_core::ParsedDocument;

/// JSON formatter - streams sentences as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    written: usize,
}

/// Data structure for one sentence in JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentData {
    /// Corpus file the sentence came from
    pub file: String,
    /// Block index within that file
    pub block: usize,
    /// Words joined by spaces
    pub text: String,
    /// Tokens in sentence order
    pub tokens: Vec<TokenData>,
}

/// Data structure for one token in JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenData {
    /// 1-based token id
    pub id: usize,
    /// Surface form
    pub word: String,
    /// Lemma, if any
    pub lemma: Option<String>,
    /// Part-of-speech tag
    pub pos: String,
    /// 1-based head position, 0 for a root
    pub head: usize,
    /// Dependency relation
    pub relation: String,
}

impl DocumentData {
    fn new(document: &ParsedDocument, source: &Path) -> Self {
        let tokens = document
            .tree()
            .nodes()
            .iter()
            .map(|node| TokenData {
                id: node.id,
                word: node.word.clone(),
                lemma: node.lemma.clone(),
                pos: node.pos.clone(),
                head: node.head.map_or(0, |head| head + 1),
                relation: node.relation.clone(),
            })
            .collect();

        Self {
            file: source.display().to_string(),
            block: document.block(),
            text: document.text(),
            tokens,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            written: 0,
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &ParsedDocument, source: &Path) -> Result<()> {
        let data = DocumentData::new(document, source);
        let separator = if self.written == 0 { "[" } else { "," };
        if self.pretty {
            writeln!(self.writer, "{separator}")?;
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
        } else {
            write!(self.writer, "{separator}")?;
            serde_json::to_writer(&mut self.writer, &data)?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written == 0 {
            write!(self.writer, "[")?;
        } else if self.pretty {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "]")?;
        self.writer.flush()?;
        Ok(())
    }
}
