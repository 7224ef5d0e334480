//! Sentence stream adapter
//!
//! Presents a tagged corpus as a finite, forward-only sequence of
//! [`ParsedDocument`]s with one element of lookahead. The lookahead slot is
//! filled at construction and after every [`pull`](SentenceStream::pull),
//! never from [`has_more`](SentenceStream::has_more), so querying has no
//! side effects.
//!
//! `pull` takes `&mut self`; a stream is meant for one consumer at a time.
//! Use [`SharedSentenceStream`](crate::SharedSentenceStream) to share one
//! between threads.

use crate::config::ReaderConfig;
use crate::document::ParsedDocument;
use crate::error::{Result, StreamError};
use crate::parser::TreeParser;
use crate::scanner::BlockScanner;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Stream over a corpus file opened from disk
pub type FileSentenceStream<P> = SentenceStream<BufReader<File>, P>;

/// Lazy sequence of parsed sentences read from a tagged corpus
pub struct SentenceStream<R, P> {
    scanner: BlockScanner<R>,
    parser: P,
    next: Option<ParsedDocument>,
}

impl<P: TreeParser> SentenceStream<BufReader<File>, P> {
    /// Open a corpus file with the default configuration
    ///
    /// The first document is parsed before this returns.
    pub fn open<Q: AsRef<Path>>(path: Q, parser: P) -> Result<Self> {
        SentenceStreamBuilder::new().open(path, parser)
    }
}

impl<R: BufRead, P: TreeParser> SentenceStream<R, P> {
    /// Stream documents from an already open reader
    pub fn from_reader(reader: R, parser: P) -> Result<Self> {
        Self::with_config(reader, parser, ReaderConfig::default())
    }

    /// Stream documents from a reader with a custom configuration
    pub fn with_config(reader: R, parser: P, config: ReaderConfig) -> Result<Self> {
        config.validate()?;

        let mut stream = Self {
            scanner: BlockScanner::with_config(reader, config),
            parser,
            next: None,
        };
        stream.next = stream.advance()?;
        Ok(stream)
    }

    /// Whether another document is available
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// The document the next [`pull`](Self::pull) will return
    pub fn peek(&self) -> Option<&ParsedDocument> {
        self.next.as_ref()
    }

    /// Return the pending document and parse the one after it
    ///
    /// # Errors
    /// * [`StreamError::Exhausted`] if [`has_more`](Self::has_more) is false
    /// * [`StreamError::Io`], [`StreamError::Parse`] or
    ///   [`StreamError::TruncatedBlock`] if preparing the following
    ///   document fails; the pending document is dropped and the stream
    ///   stays exhausted from then on
    pub fn pull(&mut self) -> Result<ParsedDocument> {
        let current = self.next.take().ok_or(StreamError::Exhausted)?;
        self.next = self.advance()?;
        Ok(current)
    }

    /// Always fails: the stream is read-only
    pub fn remove(&mut self) -> Result<()> {
        Err(StreamError::RemovalUnsupported)
    }

    /// Number of blocks scanned so far, including the pending one
    pub fn blocks_read(&self) -> usize {
        self.scanner.blocks_read()
    }

    /// Number of corpus lines consumed so far
    pub fn line_number(&self) -> usize {
        self.scanner.line_number()
    }

    /// The configuration in use
    pub fn config(&self) -> &ReaderConfig {
        self.scanner.config()
    }

    /// Release the underlying source, discarding any pending document
    pub fn close(self) {
        log::debug!(
            "closing sentence stream after {} blocks",
            self.scanner.blocks_read()
        );
    }

    /// Stop streaming and give back the underlying reader
    pub fn into_inner(self) -> R {
        self.scanner.into_inner()
    }

    fn advance(&mut self) -> Result<Option<ParsedDocument>> {
        let Some(block) = self.scanner.next_block()? else {
            log::debug!("end of corpus after {} blocks", self.scanner.blocks_read());
            return Ok(None);
        };

        let mut text = block.text.as_bytes();
        let tree = self
            .parser
            .read_next_tree(&mut text)
            .map_err(|source| StreamError::Parse {
                block: block.index,
                line: block.start_line,
                source,
            })?;

        Ok(Some(ParsedDocument::new(block.index, tree)))
    }
}

impl<R: BufRead, P: TreeParser> Iterator for SentenceStream<R, P> {
    type Item = Result<ParsedDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_more() {
            Some(self.pull())
        } else {
            None
        }
    }
}

impl<R: BufRead, P: TreeParser> FusedIterator for SentenceStream<R, P> {}

impl<R, P> fmt::Debug for SentenceStream<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceStream")
            .field("blocks_read", &self.scanner.blocks_read())
            .field("line_number", &self.scanner.line_number())
            .field("has_more", &self.next.is_some())
            .finish()
    }
}

/// Builder for [`SentenceStream`]
///
/// Provides a fluent interface over [`ReaderConfig`].
#[derive(Debug, Clone, Default)]
pub struct SentenceStreamBuilder {
    config: ReaderConfig,
}

impl SentenceStreamBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the line that closes a block
    pub fn close_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.config.close_tag = tag.into();
        self
    }

    /// Set the sentence delimiter prefixes
    pub fn sentence_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.sentence_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Keep or drop blank lines inside blocks
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.config.skip_blank_lines = skip;
        self
    }

    /// Reject blocks cut off by end of file
    pub fn require_close_tag(mut self, require: bool) -> Self {
        self.config.require_close_tag = require;
        self
    }

    /// Use the strict configuration preset
    pub fn strict(mut self) -> Self {
        self.config = ReaderConfig::strict();
        self
    }

    /// Build a stream over an open reader
    pub fn build<R: BufRead, P: TreeParser>(
        self,
        reader: R,
        parser: P,
    ) -> Result<SentenceStream<R, P>> {
        SentenceStream::with_config(reader, parser, self.config)
    }

    /// Open a corpus file and build a stream over it
    pub fn open<Q: AsRef<Path>, P: TreeParser>(
        self,
        path: Q,
        parser: P,
    ) -> Result<FileSentenceStream<P>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("opened corpus {}", path.display());
        self.build(BufReader::new(file), parser)
    }
}
