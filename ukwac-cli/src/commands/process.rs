//! Process command implementation

use crate::commands::CorpusArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, CorpusOpener};
use crate::output::{
    ConllFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Corpus selection and reading options
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with their tokens
    Json,
    /// Markdown numbered list per file
    Markdown,
    /// CoNLL-X columns, one blank line between sentences
    Conll,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Conll,
    ];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Conll => "conll",
        }
    }

    /// Look up a format by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name))
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.corpus.init_logging();

        log::info!("Starting corpus processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.corpus.load_config()?;
        let format = self.resolve_format(&config)?;
        let files = resolve_patterns(&self.corpus.input)?;
        let opener = CorpusOpener::from_config(&config.input)?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
            OutputFormat::Conll => Box::new(ConllFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.corpus.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let count =
                opener.for_each_document(path, |doc| formatter.format_document(doc, path))?;
            progress.file_completed(&path.display().to_string(), count);
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "Processed {} sentences from {} files",
            progress.documents(),
            files.len()
        );
        Ok(())
    }

    /// Pick the output format from the flag, then the config file
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &config.output.default_format;
        OutputFormat::from_name(name).ok_or_else(|| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }
}
