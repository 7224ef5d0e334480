//! Corpus file pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Resolve file patterns to corpus paths
///
/// Files matched by one pattern are sorted; patterns keep the order they
/// were given in and a file matched twice is only read once.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;
            if path.is_file() {
                matched.push(path);
            }
        }
        matched.sort();

        log::debug!("pattern {} matched {} files", pattern, matched.len());
        files.extend(matched.into_iter().filter(|path| seen.insert(path.clone())));
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(files)
}
