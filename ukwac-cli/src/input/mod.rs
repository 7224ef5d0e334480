//! Input handling module

pub mod corpus;
pub mod glob_resolver;

pub use corpus::CorpusOpener;
pub use glob_resolver::resolve_patterns;
