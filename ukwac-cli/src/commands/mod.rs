//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod count;
pub mod list;
pub mod process;

/// Stream sentences out of dependency-parsed ukWaC corpora
#[derive(Debug, Parser)]
#[command(name = "ukwac", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read corpus files and print their dependency-parsed sentences
    Process(process::ProcessArgs),

    /// Count sentences and tokens in corpus files
    Count(count::CountArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available column layouts
    Columns,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Count(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}

/// Arguments shared by commands that read corpus files
#[derive(Debug, Clone, Args)]
pub struct CorpusArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Column layout of token lines (wacky, conll-x)
    #[arg(long, value_name = "LAYOUT")]
    pub columns: Option<String>,

    /// Reject blocks that end without a closing </text> tag
    #[arg(long)]
    pub strict: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CorpusArgs {
    /// Load the configuration file, then apply command-line overrides
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load_or_default(self.config.as_deref())?;
        if let Some(columns) = &self.columns {
            config.input.columns = columns.clone();
        }
        if self.strict {
            config.input.strict = true;
        }
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
