//! List command implementation

use crate::commands::process::OutputFormat;
use crate::commands::ListCommands;
use anyhow::Result;
use std::io::{self, Write};
use ukwac_core::ConllFormat;

/// Execute a list subcommand
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match subcommand {
        ListCommands::Formats => write_formats(&mut out),
        ListCommands::Columns => write_columns(&mut out),
    }
}

fn write_formats<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available output formats:")?;
    for format in OutputFormat::ALL {
        writeln!(out, "  {}", format.as_str())?;
    }
    Ok(())
}

fn write_columns<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available column layouts (0-based columns):")?;
    for (name, format) in [
        ("wacky", ConllFormat::wacky()),
        ("conll-x", ConllFormat::conll_x()),
    ] {
        writeln!(
            out,
            "  {:<8} word={} lemma={} pos={} head={} relation={}",
            name,
            format.word,
            format.lemma.map_or("-".to_string(), |c| c.to_string()),
            format.pos,
            format.head,
            format.relation
        )?;
    }
    Ok(())
}
