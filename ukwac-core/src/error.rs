//! Layered error types
//!
//! `ParseError` belongs to the tree-parser capability, `StreamError` to the
//! sentence stream that drives it.

use thiserror::Error;

/// Errors raised while turning block text into a dependency tree
#[derive(Error, Debug)]
pub enum ParseError {
    /// A token line has fewer columns than the layout requires
    #[error("line {line}: missing column {column} ({field})")]
    MissingColumn {
        /// 1-based line number within the block text
        line: usize,
        /// 0-based column index that was expected
        column: usize,
        /// Name of the field stored in that column
        field: &'static str,
    },

    /// A numeric column could not be parsed
    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidNumber {
        /// 1-based line number within the block text
        line: usize,
        /// Name of the field stored in that column
        field: &'static str,
        /// The raw column content
        value: String,
    },

    /// A head refers to a token outside the sentence
    #[error("line {line}: head {head} outside sentence of {len} tokens")]
    HeadOutOfRange {
        /// 1-based line number within the block text
        line: usize,
        /// The head index as written in the corpus
        head: usize,
        /// Number of tokens in the sentence
        len: usize,
    },

    /// I/O error while reading the block sub-stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by [`SentenceStream`](crate::SentenceStream)
#[derive(Error, Debug)]
pub enum StreamError {
    /// Reading the corpus failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree parser rejected a block
    #[error("block {block} (line {line}): {source}")]
    Parse {
        /// 0-based index of the block in the corpus
        block: usize,
        /// 1-based line number of the block's opening tag
        line: usize,
        /// The parser's own error
        #[source]
        source: ParseError,
    },

    /// A block reached end of file without its closing tag (strict mode only)
    #[error("block {block} (line {line}) is missing its closing tag")]
    TruncatedBlock {
        /// 0-based index of the block in the corpus
        block: usize,
        /// 1-based line number of the block's opening tag
        line: usize,
    },

    /// `pull` was called with nothing left to return
    #[error("no more documents in stream")]
    Exhausted,

    /// The stream is read-only
    #[error("removing documents is not supported")]
    RemovalUnsupported,

    /// Invalid reader configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StreamError {
    /// Whether this error reports misuse of the stream rather than bad data
    pub fn is_precondition(&self) -> bool {
        matches!(self, StreamError::Exhausted | StreamError::RemovalUnsupported)
    }
}

/// Result type for parser operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for stream operations
pub type Result<T> = std::result::Result<T, StreamError>;
