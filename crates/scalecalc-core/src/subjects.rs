//! Subject row axis
//!
//! The subject list is supplied by the caller, either the full catalog or a
//! subset restricted to a named validation list.

use std::collections::HashSet;

use tracing::debug;

/// Placeholder shown for subjects with an empty display name
pub const UNNAMED_SUBJECT: &str = "(Unnamed Subject)";

/// Ordered row axis of a selection matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectList {
    names: Vec<String>,
}

impl SubjectList {
    /// Keep the caller's order as given
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Keep only names that exactly match an entry of `validation`, sorted
    /// alphabetically by display name.
    pub fn restricted_to<I, S>(names: I, validation: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: HashSet<&str> = validation.iter().map(String::as_str).collect();
        let mut kept: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| allowed.contains(name.as_str()))
            .collect();
        sort_by_display_name(&mut kept);

        debug!(
            kept = kept.len(),
            validation = validation.len(),
            "restrict_subjects"
        );

        Self { names: kept }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.names.iter().any(|s| s == subject)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Sort names alphabetically ignoring case, falling back to exact order on ties
pub fn sort_by_display_name(names: &mut [String]) {
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}

/// Name to show for a subject row
pub fn display_name(subject: &str) -> &str {
    if subject.is_empty() {
        UNNAMED_SUBJECT
    } else {
        subject
    }
}
