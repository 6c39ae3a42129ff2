//! Tri-state checkbox state for row and column headers

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SelectionMatrix;

/// Header checkbox state for a row or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// No eligible cells on the line
    Disabled,
    /// Eligible cells exist, none selected
    Unchecked,
    /// Some but not all eligible cells selected
    Partial,
    /// Every eligible cell selected
    Checked,
}

impl CheckState {
    fn from_counts(eligible: usize, selected: usize) -> Self {
        if eligible == 0 {
            CheckState::Disabled
        } else if selected == eligible {
            CheckState::Checked
        } else if selected > 0 {
            CheckState::Partial
        } else {
            CheckState::Unchecked
        }
    }

    /// Whether the header checkbox renders as checked.
    ///
    /// Matches `is_year_fully_selected` / `is_subject_fully_selected`, which
    /// are vacuously true for a disabled line.
    pub fn is_checked(self) -> bool {
        matches!(self, CheckState::Checked | CheckState::Disabled)
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckState::Disabled => write!(f, "disabled"),
            CheckState::Unchecked => write!(f, "unchecked"),
            CheckState::Partial => write!(f, "partial"),
            CheckState::Checked => write!(f, "checked"),
        }
    }
}

impl SelectionMatrix {
    /// Column header state
    pub fn year_check_state(&self, year: &str) -> CheckState {
        if !self.years.contains(year) {
            return CheckState::Disabled;
        }
        let (eligible, selected) = self
            .subjects
            .iter()
            .filter(|subject| self.index.has_data(subject, year))
            .fold((0, 0), |(e, s), subject| {
                (e + 1, s + usize::from(self.is_selected(subject, year)))
            });
        CheckState::from_counts(eligible, selected)
    }

    /// Row header state
    pub fn subject_check_state(&self, subject: &str) -> CheckState {
        if !self.subjects.contains(subject) {
            return CheckState::Disabled;
        }
        let (eligible, selected) = self
            .years
            .iter()
            .filter(|year| self.index.has_data(subject, year))
            .fold((0, 0), |(e, s), year| {
                (e + 1, s + usize::from(self.is_selected(subject, year)))
            });
        CheckState::from_counts(eligible, selected)
    }
}
