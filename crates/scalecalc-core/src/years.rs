//! Academic year axis
//!
//! `YEARS` is the fixed column axis shared by every calculator session.

/// Academic years with published scaling data, oldest first
pub const YEARS: &[&str] = &["2018", "2019", "2020", "2021", "2022", "2023", "2024"];

/// Ordered column axis of a selection matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearAxis {
    years: Vec<String>,
}

impl YearAxis {
    /// Build an axis from explicit labels, dropping repeats but keeping order
    pub fn new<I, S>(years: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for year in years {
            let year = year.into();
            if !out.contains(&year) {
                out.push(year);
            }
        }
        Self { years: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.years.iter().map(String::as_str)
    }

    pub fn contains(&self, year: &str) -> bool {
        self.years.iter().any(|y| y == year)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

impl Default for YearAxis {
    fn default() -> Self {
        Self::new(YEARS.iter().copied())
    }
}

/// Column header label, e.g. `'23` for `2023`
pub fn short_label(year: &str) -> String {
    let tail: String = year.chars().skip(2).collect();
    format!("'{tail}")
}
