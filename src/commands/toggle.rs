//! `scalecalc toggle` and `scalecalc clear` commands
//!
//! Applies one selection operation and reports the state of the line it
//! touched. The caller persists the result.

use scalecalc_core::error::Result;
use scalecalc_core::format::quote;
use scalecalc_core::selection::{SelectionMatrix, SelectionOp};

use crate::cli::{Cli, OutputFormat};

/// Execute a toggle or clear operation
pub fn execute(cli: &Cli, matrix: &mut SelectionMatrix, op: &SelectionOp) -> Result<()> {
    let before = matrix.len();
    matrix.apply(op);
    let after = matrix.len();

    match cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::json!({
                "selected": after,
                "added": after.saturating_sub(before),
                "removed": before.saturating_sub(after),
            });
            match op {
                SelectionOp::Cell { subject, year } => {
                    output["operation"] = serde_json::json!("cell");
                    output["subject"] = serde_json::json!(subject);
                    output["year"] = serde_json::json!(year);
                    output["cell_selected"] = serde_json::json!(matrix.is_selected(subject, year));
                }
                SelectionOp::Year(year) => {
                    output["operation"] = serde_json::json!("year");
                    output["year"] = serde_json::json!(year);
                    output["state"] = serde_json::json!(matrix.year_check_state(year));
                }
                SelectionOp::Subject(subject) => {
                    output["operation"] = serde_json::json!("subject");
                    output["subject"] = serde_json::json!(subject);
                    output["state"] = serde_json::json!(matrix.subject_check_state(subject));
                }
                SelectionOp::ClearAll => {
                    output["operation"] = serde_json::json!("clear");
                }
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", describe(matrix, op));
                println!("{} selected", after);
            }
        }
        OutputFormat::Records => {
            println!(
                "{} selected={} added={} removed={}",
                record_target(op),
                after,
                after.saturating_sub(before),
                before.saturating_sub(after)
            );
        }
    }

    Ok(())
}

fn describe(matrix: &SelectionMatrix, op: &SelectionOp) -> String {
    match op {
        SelectionOp::Cell { subject, year } => {
            let verb = if matrix.is_selected(subject, year) {
                "selected"
            } else {
                "deselected"
            };
            format!("{} {} {}", verb, subject, year)
        }
        SelectionOp::Year(year) => {
            format!("year {}: {}", year, matrix.year_check_state(year))
        }
        SelectionOp::Subject(subject) => {
            format!("subject {}: {}", subject, matrix.subject_check_state(subject))
        }
        SelectionOp::ClearAll => "cleared all selections".to_string(),
    }
}

fn record_target(op: &SelectionOp) -> String {
    match op {
        SelectionOp::Cell { subject, year } => {
            format!("toggle cell subject={} year={}", quote(subject), year)
        }
        SelectionOp::Year(year) => format!("toggle year year={}", year),
        SelectionOp::Subject(subject) => format!("toggle subject subject={}", quote(subject)),
        SelectionOp::ClearAll => "clear".to_string(),
    }
}
