//! `scalecalc list` command - current selections, ordered by subject then year

use scalecalc_core::error::Result;
use scalecalc_core::format::quote;
use scalecalc_core::selection::SelectionMatrix;

use crate::cli::{Cli, OutputFormat};

/// Execute the list command
pub fn execute(cli: &Cli, matrix: &SelectionMatrix) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = matrix
                .iter()
                .map(|(subject, year)| {
                    serde_json::json!({
                        "subject": subject,
                        "year": year,
                        "has_data": matrix.index().has_data(subject, year),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if matrix.is_empty() {
                if !cli.quiet {
                    println!("No selections");
                }
            } else {
                for (subject, year) in matrix.iter() {
                    if matrix.index().has_data(subject, year) {
                        println!("{}  {}", year, subject);
                    } else {
                        println!("{}  {} (no data)", year, subject);
                    }
                }
            }
        }
        OutputFormat::Records => {
            for (subject, year) in matrix.iter() {
                println!(
                    "selection subject={} year={} data={}",
                    quote(subject),
                    year,
                    matrix.index().has_data(subject, year)
                );
            }
        }
    }

    Ok(())
}
