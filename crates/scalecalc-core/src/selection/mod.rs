//! Selection state over the subjects x years grid
//!
//! A cell is eligible when the availability index has data for it. Row and
//! column operations only ever add eligible cells; "fully selected" ignores
//! ineligible cells, so a line with no eligible cells is vacuously full.

mod check;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::availability::AvailabilityIndex;
use crate::subjects::SubjectList;
use crate::years::YearAxis;

pub use check::CheckState;

/// A single chosen (subject, year) pair
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub subject: String,
    pub year: String,
}

impl Selection {
    pub fn new(subject: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            year: year.into(),
        }
    }
}

/// A single mutation of the selection set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOp {
    Cell { subject: String, year: String },
    Year(String),
    Subject(String),
    ClearAll,
}

/// Selected cells for one calculator session
#[derive(Debug, Clone)]
pub struct SelectionMatrix {
    subjects: SubjectList,
    years: YearAxis,
    index: AvailabilityIndex,
    /// subject -> selected years
    selected: BTreeMap<String, BTreeSet<String>>,
}

impl SelectionMatrix {
    /// Create an empty selection over the given axes
    pub fn new(subjects: SubjectList, years: YearAxis, index: AvailabilityIndex) -> Self {
        Self {
            subjects,
            years,
            index,
            selected: BTreeMap::new(),
        }
    }

    /// Restore a previously saved selection set. Repeated pairs collapse.
    pub fn with_selections<I>(mut self, selections: I) -> Self
    where
        I: IntoIterator<Item = Selection>,
    {
        for s in selections {
            self.selected.entry(s.subject).or_default().insert(s.year);
        }
        self
    }

    pub fn subjects(&self) -> &SubjectList {
        &self.subjects
    }

    pub fn years(&self) -> &YearAxis {
        &self.years
    }

    pub fn index(&self) -> &AvailabilityIndex {
        &self.index
    }

    /// True iff the pair is in the selection set, eligible or not
    pub fn is_selected(&self, subject: &str, year: &str) -> bool {
        self.selected
            .get(subject)
            .is_some_and(|years| years.contains(year))
    }

    /// True iff the pair lies on both axes and has scaling data
    pub fn is_eligible(&self, subject: &str, year: &str) -> bool {
        self.index.has_data(subject, year)
            && self.subjects.contains(subject)
            && self.years.contains(year)
    }

    /// Every eligible cell in the column is selected
    pub fn is_year_fully_selected(&self, year: &str) -> bool {
        if !self.years.contains(year) {
            return true;
        }
        self.subjects
            .iter()
            .all(|subject| !self.index.has_data(subject, year) || self.is_selected(subject, year))
    }

    /// Every eligible cell in the row is selected
    pub fn is_subject_fully_selected(&self, subject: &str) -> bool {
        if !self.subjects.contains(subject) {
            return true;
        }
        self.years
            .iter()
            .all(|year| !self.index.has_data(subject, year) || self.is_selected(subject, year))
    }

    /// Some subject has data for this year
    pub fn is_year_enabled(&self, year: &str) -> bool {
        self.years.contains(year)
            && self
                .subjects
                .iter()
                .any(|subject| self.index.has_data(subject, year))
    }

    /// Add the pair if absent, remove it if present.
    ///
    /// Eligibility is not enforced here; an ineligible pair becomes a stale
    /// selection until it is toggled again or pruned.
    pub fn toggle_cell(&mut self, subject: &str, year: &str) {
        if self.remove(subject, year) {
            debug!(subject, year, "deselect_cell");
            return;
        }

        if !self.is_eligible(subject, year) {
            warn!(subject, year, "selecting cell without scaling data");
        }
        self.insert(subject, year);
        debug!(subject, year, "select_cell");
    }

    /// Select every eligible cell in the column, or clear the column if it is
    /// already fully selected.
    pub fn toggle_year(&mut self, year: &str) {
        if !self.years.contains(year) {
            debug!(year, "toggle_year: year not on axis");
            return;
        }

        if self.is_year_fully_selected(year) {
            let mut removed = 0usize;
            for years in self.selected.values_mut() {
                if years.remove(year) {
                    removed += 1;
                }
            }
            self.selected.retain(|_, years| !years.is_empty());
            debug!(year, removed, "deselect_year");
        } else {
            let missing: Vec<String> = self
                .subjects
                .iter()
                .filter(|subject| {
                    self.index.has_data(subject, year) && !self.is_selected(subject, year)
                })
                .map(str::to_string)
                .collect();
            for subject in &missing {
                self.insert(subject, year);
            }
            debug!(year, added = missing.len(), "select_year");
        }
    }

    /// Select every eligible cell in the row, or clear the row if it is
    /// already fully selected.
    pub fn toggle_subject(&mut self, subject: &str) {
        if !self.subjects.contains(subject) {
            debug!(subject, "toggle_subject: subject not on axis");
            return;
        }

        if self.is_subject_fully_selected(subject) {
            let removed = self.selected.remove(subject).map_or(0, |years| years.len());
            debug!(subject, removed, "deselect_subject");
        } else {
            let missing: Vec<String> = self
                .years
                .iter()
                .filter(|year| {
                    self.index.has_data(subject, year) && !self.is_selected(subject, year)
                })
                .map(str::to_string)
                .collect();
            for year in &missing {
                self.insert(subject, year);
            }
            debug!(subject, added = missing.len(), "select_subject");
        }
    }

    /// Empty the selection set
    pub fn clear_all(&mut self) {
        let removed = self.len();
        self.selected.clear();
        debug!(removed, "clear_all");
    }

    /// Apply one operation
    pub fn apply(&mut self, op: &SelectionOp) {
        match op {
            SelectionOp::Cell { subject, year } => self.toggle_cell(subject, year),
            SelectionOp::Year(year) => self.toggle_year(year),
            SelectionOp::Subject(subject) => self.toggle_subject(subject),
            SelectionOp::ClearAll => self.clear_all(),
        }
    }

    /// Selected pairs, ordered by subject then year
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected.iter().flat_map(|(subject, years)| {
            years
                .iter()
                .map(move |year| (subject.as_str(), year.as_str()))
        })
    }

    /// Owned copy of the selection set, ordered by subject then year
    pub fn selections(&self) -> Vec<Selection> {
        self.iter()
            .map(|(subject, year)| Selection::new(subject, year))
            .collect()
    }

    /// Selections on cells that are not eligible in this session
    pub fn stale_selections(&self) -> Vec<Selection> {
        self.iter()
            .filter(|(subject, year)| !self.is_eligible(subject, year))
            .map(|(subject, year)| Selection::new(subject, year))
            .collect()
    }

    /// Drop stale selections, returning how many were removed
    pub fn prune_stale(&mut self) -> usize {
        let stale = self.stale_selections();
        for s in &stale {
            self.remove(&s.subject, &s.year);
        }
        if !stale.is_empty() {
            debug!(removed = stale.len(), "prune_stale");
        }
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn insert(&mut self, subject: &str, year: &str) {
        self.selected
            .entry(subject.to_string())
            .or_default()
            .insert(year.to_string());
    }

    fn remove(&mut self, subject: &str, year: &str) -> bool {
        let Some(years) = self.selected.get_mut(subject) else {
            return false;
        };
        let removed = years.remove(year);
        if years.is_empty() {
            self.selected.remove(subject);
        }
        removed
    }
}
