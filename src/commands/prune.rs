//! `scalecalc prune` command - drop selections on cells without scaling data

use scalecalc_core::error::Result;
use scalecalc_core::format::quote;
use scalecalc_core::selection::SelectionMatrix;

use crate::cli::{Cli, OutputFormat};

/// Execute the prune command
pub fn execute(cli: &Cli, matrix: &mut SelectionMatrix) -> Result<()> {
    let stale = matrix.stale_selections();
    let removed = matrix.prune_stale();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "removed": removed,
                "pruned": stale,
                "selected": matrix.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                for s in &stale {
                    println!("dropped {} {}", s.subject, s.year);
                }
                println!("pruned {} stale selections", removed);
            }
        }
        OutputFormat::Records => {
            for s in &stale {
                println!("pruned subject={} year={}", quote(&s.subject), s.year);
            }
        }
    }

    Ok(())
}
