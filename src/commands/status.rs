//! `scalecalc status` command - one cell and its row/column state

use scalecalc_core::error::Result;
use scalecalc_core::format::quote;
use scalecalc_core::selection::SelectionMatrix;
use tracing::warn;

use crate::cli::{Cli, OutputFormat};

/// Execute the status command
pub fn execute(cli: &Cli, matrix: &SelectionMatrix, subject: &str, year: &str) -> Result<()> {
    let has_data = matrix.index().has_data(subject, year);
    let selected = matrix.is_selected(subject, year);
    let year_state = matrix.year_check_state(year);
    let subject_state = matrix.subject_check_state(subject);

    if !matrix.subjects().contains(subject) {
        warn!(subject, "subject is not in the current subject list");
    }
    if !matrix.years().contains(year) {
        warn!(year, "year is not a known academic year");
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "subject": subject,
                "year": year,
                "has_data": has_data,
                "selected": selected,
                "eligible": matrix.is_eligible(subject, year),
                "year_fully_selected": matrix.is_year_fully_selected(year),
                "subject_fully_selected": matrix.is_subject_fully_selected(subject),
                "year_state": year_state,
                "subject_state": subject_state,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "{} {}: {}, {}",
                subject,
                year,
                if has_data { "has data" } else { "no data" },
                if selected { "selected" } else { "not selected" }
            );
            if !cli.quiet {
                println!("  year {}: {}", year, year_state);
                println!("  subject {}: {}", subject, subject_state);
            }
        }
        OutputFormat::Records => {
            println!(
                "cell subject={} year={} data={} selected={} year_state={} subject_state={}",
                quote(subject),
                year,
                has_data,
                selected,
                year_state,
                subject_state
            );
        }
    }

    Ok(())
}
