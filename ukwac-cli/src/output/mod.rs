//! Output formatting module

use anyhow::Result;
use std::path::Path;
use ukwac_core::ParsedDocument;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single parsed sentence read from `source`
    fn format_document(&mut self, document: &ParsedDocument, source: &Path) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod conll;
pub mod json;
pub mod markdown;
pub mod text;

pub use conll::ConllFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
