//! Count command implementation

use crate::commands::CorpusArgs;
use crate::input::{resolve_patterns, CorpusOpener};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::Path;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Corpus selection and reading options
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Sentence and token totals for one corpus file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusCounts {
    /// Number of sentences
    pub sentences: usize,
    /// Number of tokens
    pub tokens: usize,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        self.corpus.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.corpus.load_config()?;
        let files = resolve_patterns(&self.corpus.input)?;
        let opener = CorpusOpener::from_config(&config.input)?;

        let mut progress = ProgressReporter::new(self.corpus.quiet);
        progress.init_files(files.len() as u64);

        let mut rows = Vec::with_capacity(files.len());
        for path in &files {
            let counts = count_file(&opener, path)?;
            progress.file_completed(&path.display().to_string(), counts.sentences);
            rows.push((path.display().to_string(), counts));
        }
        progress.finish();

        let stdout = io::stdout();
        write_table(&mut stdout.lock(), &rows)?;
        Ok(())
    }
}

/// Count sentences and tokens in one corpus file
pub fn count_file(opener: &CorpusOpener, path: &Path) -> Result<CorpusCounts> {
    let mut tokens = 0;
    let sentences = opener.for_each_document(path, |doc| {
        tokens += doc.tree().len();
        Ok(())
    })?;
    Ok(CorpusCounts { sentences, tokens })
}

fn write_table<W: Write>(writer: &mut W, rows: &[(String, CorpusCounts)]) -> Result<()> {
    let mut total = CorpusCounts::default();
    for (name, counts) in rows {
        writeln!(writer, "{}\t{}\t{}", name, counts.sentences, counts.tokens)?;
        total.sentences += counts.sentences;
        total.tokens += counts.tokens;
    }
    if rows.len() > 1 {
        writeln!(writer, "total\t{}\t{}", total.sentences, total.tokens)?;
    }
    writer.flush()?;
    Ok(())
}
