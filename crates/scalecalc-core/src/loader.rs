//! Assemble a selection matrix from configured inputs

use std::time::Instant;

use tracing::{debug, warn};

use crate::availability::AvailabilityIndex;
use crate::config::SessionConfig;
use crate::error::{Result, ScaleError};
use crate::scaling::{distinct_subjects, load_names, load_rows};
use crate::selection::SelectionMatrix;
use crate::session::SessionState;
use crate::subjects::SubjectList;
use crate::trace_time;
use crate::years::YearAxis;

/// Load the dataset, subject list and saved state named by `config`.
///
/// Without a subject list the distinct subjects of the dataset are used.
/// A validation list restricts the subjects by exact name and sorts them.
pub fn open_matrix(config: &SessionConfig) -> Result<SelectionMatrix> {
    let start = Instant::now();

    let data_path = config
        .data
        .as_deref()
        .ok_or_else(|| ScaleError::MissingInput("data".to_string()))?;
    let rows = load_rows(data_path)?;

    let names = match &config.subjects {
        Some(path) => load_names("subject list", path)?,
        None => distinct_subjects(&rows),
    };

    let subjects = match &config.validation {
        Some(path) => {
            let validation = load_names("validation list", path)?;
            SubjectList::restricted_to(names, &validation)
        }
        None => SubjectList::new(names),
    };

    let index = AvailabilityIndex::from_rows(&rows);
    let mut matrix = SelectionMatrix::new(subjects, YearAxis::default(), index);

    if let Some(state_path) = &config.state {
        let state = SessionState::load(state_path)?;
        matrix = matrix.with_selections(state.selections);
    }

    let stale = matrix.stale_selections();
    if !stale.is_empty() {
        warn!(count = stale.len(), "saved selections without scaling data");
    }

    debug!(
        subjects = matrix.subjects().len(),
        pairs = matrix.index().len(),
        selected = matrix.len(),
        "open_matrix"
    );
    trace_time!(start, "open_matrix");

    Ok(matrix)
}
