//! Opening corpus files as sentence streams

use crate::config::InputConfig;
use crate::error::CliError;
use anyhow::Result;
use std::io::ErrorKind;
use std::path::Path;
use ukwac_core::{
    ConllFormat, ConllParser, FileSentenceStream, ParsedDocument, ReaderConfig,
    SentenceStreamBuilder, StreamError,
};

/// Opens corpus files with one column layout and reader configuration
#[derive(Debug, Clone)]
pub struct CorpusOpener {
    parser: ConllParser,
    config: ReaderConfig,
}

impl CorpusOpener {
    /// Create an opener for the given layout and configuration
    pub fn new(format: ConllFormat, config: ReaderConfig) -> Self {
        Self {
            parser: ConllParser::new(format),
            config,
        }
    }

    /// Create an opener from the `[input]` configuration section
    pub fn from_config(input: &InputConfig) -> Result<Self> {
        Ok(Self::new(input.column_format()?, input.reader_config()))
    }

    /// Open `path` as a sentence stream
    pub fn open(&self, path: &Path) -> Result<FileSentenceStream<&ConllParser>> {
        let stream = SentenceStreamBuilder::new()
            .config(self.config.clone())
            .open(path, &self.parser)
            .map_err(|e| corpus_error(path, e))?;
        Ok(stream)
    }

    /// Run `f` on every document in `path`, returning how many were read
    pub fn for_each_document<F>(&self, path: &Path, mut f: F) -> Result<usize>
    where
        F: FnMut(&ParsedDocument) -> Result<()>,
    {
        let mut count = 0;
        for document in self.open(path)? {
            let document = document.map_err(|e| corpus_error(path, e))?;
            f(&document)?;
            count += 1;
        }
        log::info!("{}: {} documents", path.display(), count);
        Ok(count)
    }
}

fn corpus_error(path: &Path, error: StreamError) -> anyhow::Error {
    match error {
        StreamError::Io(e) if e.kind() == ErrorKind::NotFound => {
            CliError::FileNotFound(path.display().to_string()).into()
        }
        other => CliError::CorpusError {
            path: path.display().to_string(),
            message: other.to_string(),
        }
        .into(),
    }
}
