use clap::Subcommand;

use scalecalc_core::selection::SelectionOp;

#[derive(Subcommand, Debug, Clone)]
pub enum ToggleCommands {
    /// Toggle a single cell
    Cell {
        /// Subject display name
        subject: String,

        /// Academic year
        year: String,
    },

    /// Select or clear every cell with data in a year column
    Year {
        /// Academic year
        year: String,
    },

    /// Select or clear every cell with data in a subject row
    Subject {
        /// Subject display name
        subject: String,
    },
}

impl From<&ToggleCommands> for SelectionOp {
    fn from(cmd: &ToggleCommands) -> Self {
        match cmd {
            ToggleCommands::Cell { subject, year } => SelectionOp::Cell {
                subject: subject.clone(),
                year: year.clone(),
            },
            ToggleCommands::Year { year } => SelectionOp::Year(year.clone()),
            ToggleCommands::Subject { subject } => SelectionOp::Subject(subject.clone()),
        }
    }
}
