//! Streaming reader for dependency-parsed corpora
//!
//! Reads corpora in the ukWaC layout, where each sentence sits in its own
//! `<text ...>` ... `</text>` block wrapped in `<s>`/`</s>` delimiters and
//! every token is one CoNLL line. [`SentenceStream`] scans one block at a
//! time, strips the markup and blank lines, and hands the remaining token
//! lines to a [`TreeParser`]. Parsing is pluggable; [`ConllParser`] covers
//! the WaCky and CoNLL-X column layouts.
//!
//! ```no_run
//! use ukwac_core::{ConllParser, SentenceStream};
//!
//! let stream = SentenceStream::open("ukwac.conll", ConllParser::wacky())?;
//! for document in stream {
//!     println!("{}", document?.text());
//! }
//! # Ok::<(), ukwac_core::StreamError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod shared;
pub mod stream;
pub mod tree;

// Re-export key types
pub use config::ReaderConfig;
pub use document::ParsedDocument;
pub use error::{ParseError, Result, StreamError};
pub use parser::{parser_fn, ConllFormat, ConllParser, TreeParser};
pub use scanner::{BlockScanner, RawBlock};
pub use shared::SharedSentenceStream;
pub use stream::{FileSentenceStream, SentenceStream, SentenceStreamBuilder};
pub use tree::{DependencyNode, DependencyTree};
