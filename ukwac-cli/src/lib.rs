//! ukwac CLI library
//!
//! This library provides the command-line interface for streaming
//! dependency-parsed sentences out of ukWaC-style corpora.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
