//! Availability lookup over the scaling dataset
//!
//! The selection matrix asks "does subject S have data for year Y?" for every
//! visible cell after every change, so rows are indexed once up front.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::scaling::ScalingRow;

/// Membership index of (subject, year) pairs that have scaling data
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    /// subject -> years with data
    by_subject: HashMap<String, HashSet<String>>,
    /// year -> subjects with data
    by_year: HashMap<String, HashSet<String>>,
    pairs: usize,
}

impl AvailabilityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a slice of scaling rows. Duplicate pairs collapse.
    pub fn from_rows(rows: &[ScalingRow]) -> Self {
        rows.iter()
            .map(|r| (r.subject.as_str(), r.year.as_str()))
            .collect()
    }

    /// Record that `subject` has data for `year`
    pub fn insert(&mut self, subject: &str, year: &str) {
        let inserted = self
            .by_subject
            .entry(subject.to_string())
            .or_default()
            .insert(year.to_string());
        if inserted {
            self.by_year
                .entry(year.to_string())
                .or_default()
                .insert(subject.to_string());
            self.pairs += 1;
        }
    }

    /// True iff a scaling row exists for this subject and year
    pub fn has_data(&self, subject: &str, year: &str) -> bool {
        self.by_subject
            .get(subject)
            .is_some_and(|years| years.contains(year))
    }

    /// Years with data for a subject, sorted
    pub fn years_for(&self, subject: &str) -> BTreeSet<&str> {
        self.by_subject
            .get(subject)
            .map(|years| years.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Subjects with data for a year, sorted
    pub fn subjects_for(&self, year: &str) -> BTreeSet<&str> {
        self.by_year
            .get(year)
            .map(|subjects| subjects.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of distinct (subject, year) pairs
    pub fn len(&self) -> usize {
        self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AvailabilityIndex {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut index = AvailabilityIndex::new();
        for (subject, year) in iter {
            index.insert(subject, year);
        }
        debug!(pairs = index.len(), "build_availability_index");
        index
    }
}
