//! `scalecalc show` command - the subject/year grid
//!
//! Row and column headers carry the select-all checkbox state; cells show
//! `[x]` selected, `[ ]` selectable, ` - ` no data and `[!]` a stale
//! selection on a cell without data.

use scalecalc_core::error::Result;
use scalecalc_core::format::quote;
use scalecalc_core::selection::{CheckState, SelectionMatrix};
use scalecalc_core::subjects::display_name;
use scalecalc_core::years::short_label;

use crate::cli::{Cli, OutputFormat};

/// Header checkbox glyph
pub fn state_mark(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Partial => "[~]",
        CheckState::Unchecked => "[ ]",
        CheckState::Disabled => " - ",
    }
}

/// Cell glyph
pub fn cell_mark(matrix: &SelectionMatrix, subject: &str, year: &str) -> &'static str {
    match (
        matrix.index().has_data(subject, year),
        matrix.is_selected(subject, year),
    ) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "[!]",
        (false, false) => " - ",
    }
}

/// Execute the show command
pub fn execute(cli: &Cli, matrix: &SelectionMatrix) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let years: Vec<_> = matrix
                .years()
                .iter()
                .map(|year| {
                    serde_json::json!({
                        "year": year,
                        "label": short_label(year),
                        "state": matrix.year_check_state(year),
                        "enabled": matrix.is_year_enabled(year),
                    })
                })
                .collect();

            let subjects: Vec<_> = matrix
                .subjects()
                .iter()
                .map(|subject| {
                    let cells: Vec<_> = matrix
                        .years()
                        .iter()
                        .map(|year| {
                            serde_json::json!({
                                "year": year,
                                "has_data": matrix.index().has_data(subject, year),
                                "selected": matrix.is_selected(subject, year),
                            })
                        })
                        .collect();
                    serde_json::json!({
                        "subject": subject,
                        "display": display_name(subject),
                        "state": matrix.subject_check_state(subject),
                        "cells": cells,
                    })
                })
                .collect();

            let output = serde_json::json!({
                "subject_count": matrix.subjects().len(),
                "selected": matrix.len(),
                "years": years,
                "subjects": subjects,
                "stale": matrix.stale_selections(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", render_grid(matrix, cli.quiet));
        }
        OutputFormat::Records => {
            println!(
                "summary subjects={} selected={} stale={}",
                matrix.subjects().len(),
                matrix.len(),
                matrix.stale_selections().len()
            );
            for year in matrix.years().iter() {
                println!(
                    "year={} label={} state={}",
                    year,
                    short_label(year),
                    matrix.year_check_state(year)
                );
            }
            for subject in matrix.subjects().iter() {
                let available: Vec<&str> = matrix
                    .years()
                    .iter()
                    .filter(|year| matrix.index().has_data(subject, year))
                    .collect();
                let selected: Vec<&str> = matrix
                    .years()
                    .iter()
                    .filter(|year| matrix.is_selected(subject, year))
                    .collect();
                println!(
                    "subject={} state={} available={} selected={}",
                    quote(subject),
                    matrix.subject_check_state(subject),
                    available.join(","),
                    selected.join(",")
                );
            }
        }
    }

    Ok(())
}

/// Render the grid for terminal output
pub fn render_grid(matrix: &SelectionMatrix, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        out.push_str(&format!("Found {} subjects\n", matrix.subjects().len()));
    }

    let width = matrix
        .subjects()
        .iter()
        .map(|s| display_name(s).chars().count())
        .max()
        .unwrap_or(0)
        .max("Subject".len());
    // Row prefix is "<mark> <name>"
    let pad = " ".repeat(width + 4);

    out.push_str(&pad);
    for year in matrix.years().iter() {
        out.push_str(&format!(" {:>4}", short_label(year)));
    }
    out.push('\n');

    out.push_str(&pad);
    for year in matrix.years().iter() {
        out.push_str(&format!(" {:>4}", state_mark(matrix.year_check_state(year))));
    }
    out.push('\n');

    for subject in matrix.subjects().iter() {
        out.push_str(state_mark(matrix.subject_check_state(subject)));
        out.push_str(&format!(" {:<width$}", display_name(subject), width = width));
        for year in matrix.years().iter() {
            out.push_str(&format!(" {:>4}", cell_mark(matrix, subject, year)));
        }
        out.push('\n');
    }

    if !quiet {
        out.push_str(&format!("{} selected\n", matrix.len()));
        let stale = matrix.stale_selections().len();
        if stale > 0 {
            out.push_str(&format!(
                "{} selected without scaling data (run `scalecalc prune` to drop)\n",
                stale
            ));
        }
    }

    out
}
