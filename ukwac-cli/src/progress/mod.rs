//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for corpus files
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    documents: usize,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            documents: 0,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&mut self, filename: &str, documents: usize) {
        self.documents += documents;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename}: {documents} sentences"));
            pb.inc(1);
        }
    }

    /// Total sentences reported so far
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("Complete: {} sentences", self.documents));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(3);
        assert!(reporter.progress_bar.is_none());

        reporter.file_completed("a.conll", 4);
        reporter.file_completed("b.conll", 6);
        assert_eq!(reporter.documents(), 10);
        reporter.finish();
    }

    #[test]
    fn test_reporter_counts_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(2);
        reporter.file_completed("a.conll", 1);
        assert_eq!(reporter.progress_bar.as_ref().unwrap().position(), 1);
        reporter.finish();
    }
}
