//! Scaling dataset records and JSON input loading

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScaleError};
use crate::subjects::sort_by_display_name;

/// One (subject, year) pair with published scaling data.
///
/// Fields other than `subject` and `year` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingRow {
    pub subject: String,
    pub year: String,
    #[serde(flatten)]
    pub payload: BTreeMap<String, serde_json::Value>,
}

impl ScalingRow {
    pub fn new(subject: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            year: year.into(),
            payload: BTreeMap::new(),
        }
    }
}

fn read_input(what: &str, path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScaleError::InputNotFound {
            what: what.to_string(),
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| ScaleError::io_operation("read", path.display(), e))
}

/// Load scaling rows from a JSON array of objects
pub fn load_rows(path: &Path) -> Result<Vec<ScalingRow>> {
    let content = read_input("scaling data", path)?;
    let rows: Vec<ScalingRow> = serde_json::from_str(&content)
        .map_err(|e| ScaleError::invalid_input("scaling data", path, e))?;
    debug!(rows = rows.len(), path = %path.display(), "load_rows");
    Ok(rows)
}

/// Load a list of names from a JSON array of strings
pub fn load_names(what: &str, path: &Path) -> Result<Vec<String>> {
    let content = read_input(what, path)?;
    let names: Vec<String> =
        serde_json::from_str(&content).map_err(|e| ScaleError::invalid_input(what, path, e))?;
    debug!(names = names.len(), path = %path.display(), what, "load_names");
    Ok(names)
}

/// Distinct subjects present in the dataset, sorted
pub fn distinct_subjects(rows: &[ScalingRow]) -> Vec<String> {
    let mut subjects: Vec<String> = rows.iter().map(|r| r.subject.clone()).collect();
    sort_by_display_name(&mut subjects);
    subjects.dedup();
    subjects
}
