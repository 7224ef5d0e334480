//! Configuration types for the sentence stream

use crate::error::{Result, StreamError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closing tag of a corpus block
pub const TEXT_CLOSE_TAG: &str = "</text>";

/// Sentence delimiter tags stripped from block text
pub const SENTENCE_TAGS: [&str; 2] = ["<s>", "</s>"];

/// How blocks are delimited and cleaned
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Line that ends a block (exact match)
    pub close_tag: String,
    /// Line prefixes marking sentence delimiters to discard
    pub sentence_tags: Vec<String>,
    /// Drop zero-length lines inside a block
    pub skip_blank_lines: bool,
    /// Fail on a block cut off by end of file instead of parsing it as-is
    pub require_close_tag: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            close_tag: TEXT_CLOSE_TAG.to_string(),
            sentence_tags: SENTENCE_TAGS.iter().map(|tag| tag.to_string()).collect(),
            skip_blank_lines: true,
            require_close_tag: false,
        }
    }
}

impl ReaderConfig {
    /// Lenient configuration: truncated final blocks are accepted
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict configuration: every block must end with its closing tag
    pub fn strict() -> Self {
        Self {
            require_close_tag: true,
            ..Self::default()
        }
    }

    /// Check the configuration for values the scanner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.close_tag.is_empty() {
            return Err(StreamError::Config("close tag must not be empty".to_string()));
        }
        if self.sentence_tags.iter().any(|tag| tag.is_empty()) {
            return Err(StreamError::Config(
                "sentence tags must not be empty".to_string(),
            ));
        }
        if self.sentence_tags.contains(&self.close_tag) {
            return Err(StreamError::Config(format!(
                "close tag '{}' is also listed as a sentence tag",
                self.close_tag
            )));
        }
        Ok(())
    }

    pub(crate) fn is_sentence_tag(&self, line: &str) -> bool {
        self.sentence_tags.iter().any(|tag| line.starts_with(tag.as_str()))
    }
}
