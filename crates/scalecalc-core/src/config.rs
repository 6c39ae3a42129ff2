//! Calculator configuration
//!
//! Configuration is stored in `scalecalc.toml`. Every entry is optional and
//! command-line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaleError};

/// Default configuration file name
pub const CONFIG_FILE: &str = "scalecalc.toml";

/// Input and state locations for a calculator session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Scaling dataset (JSON array of rows)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    /// Candidate subject names (JSON array of strings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<PathBuf>,

    /// Validation list restricting the subjects (JSON array of strings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<PathBuf>,

    /// Saved selection state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PathBuf>,
}

impl SessionConfig {
    /// Load configuration from a file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ScaleError::io_operation("read config", path.display(), e))?;
        let config: SessionConfig = toml::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolved_against(base))
    }

    /// Load configuration if the file exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScaleError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| ScaleError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Overlay explicitly given values on top of this configuration
    pub fn merged_with(self, overrides: SessionConfig) -> Self {
        Self {
            data: overrides.data.or(self.data),
            subjects: overrides.subjects.or(self.subjects),
            validation: overrides.validation.or(self.validation),
            state: overrides.state.or(self.state),
        }
    }

    fn resolved_against(self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| {
            p.map(|p| if p.is_absolute() { p } else { base.join(p) })
        };
        Self {
            data: resolve(self.data),
            subjects: resolve(self.subjects),
            validation: resolve(self.validation),
            state: resolve(self.state),
        }
    }
}
