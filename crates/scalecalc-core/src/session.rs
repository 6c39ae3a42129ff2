//! Saved selection state between calculator invocations
//!
//! State is stored as pretty-printed JSON. A missing file is an empty session.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScaleError};
use crate::selection::{Selection, SelectionMatrix};

/// Current session state format version
pub const SESSION_FORMAT_VERSION: u32 = 1;

/// Persisted selection set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// When the state was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub selections: Vec<Selection>,
}

fn default_version() -> u32 {
    SESSION_FORMAT_VERSION
}

impl SessionState {
    /// Snapshot the selections of a matrix
    pub fn from_matrix(matrix: &SelectionMatrix) -> Self {
        Self {
            version: SESSION_FORMAT_VERSION,
            saved_at: None,
            selections: matrix.selections(),
        }
    }

    /// Load state from a file, or an empty state if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "session state absent, starting empty");
            return Ok(Self {
                version: SESSION_FORMAT_VERSION,
                ..Self::default()
            });
        }

        let content =
            fs::read_to_string(path).map_err(|e| ScaleError::io_operation("read", path.display(), e))?;
        let state: SessionState = serde_json::from_str(&content)
            .map_err(|e| ScaleError::invalid_input("session state", path, e))?;

        if state.version > SESSION_FORMAT_VERSION {
            return Err(ScaleError::invalid_input(
                "session state",
                path,
                format!(
                    "format version {} is newer than supported version {}",
                    state.version, SESSION_FORMAT_VERSION
                ),
            ));
        }

        debug!(
            path = %path.display(),
            selections = state.selections.len(),
            "load_session"
        );
        Ok(state)
    }

    /// Write state to a file, stamping `saved_at`
    pub fn save(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ScaleError::io_operation("create directory", parent.display(), e))?;
        }

        self.version = SESSION_FORMAT_VERSION;
        self.saved_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        let temp_file = path.with_extension("json.tmp");
        fs::write(&temp_file, content)
            .map_err(|e| ScaleError::io_operation("write", temp_file.display(), e))?;
        fs::rename(&temp_file, path)
            .map_err(|e| ScaleError::io_operation("replace", path.display(), e))?;

        debug!(
            path = %path.display(),
            selections = self.selections.len(),
            "save_session"
        );
        Ok(())
    }
}
