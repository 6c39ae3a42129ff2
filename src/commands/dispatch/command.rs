//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use scalecalc_core::bail_usage;
use scalecalc_core::config::{SessionConfig, CONFIG_FILE};
use scalecalc_core::error::Result;
use scalecalc_core::loader::open_matrix;
use scalecalc_core::selection::SelectionMatrix;
use scalecalc_core::session::SessionState;
use tracing::debug;

use crate::cli::Cli;

/// Resolve the configuration file and overlay command-line paths.
///
/// An explicit `--config` must exist; the default `scalecalc.toml` in the
/// working directory is optional.
pub fn resolve_config(cli: &Cli) -> Result<SessionConfig> {
    let file_config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::load_or_default(Path::new(CONFIG_FILE))?,
    };

    Ok(file_config.merged_with(SessionConfig {
        data: cli.data.clone(),
        subjects: cli.subjects.clone(),
        validation: cli.validation.clone(),
        state: cli.state.clone(),
    }))
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load configuration and build the selection matrix for this invocation
    pub fn open_session(&self) -> Result<Session> {
        let config = resolve_config(self.cli)?;
        debug!(elapsed = ?self.start.elapsed(), "resolve_config");

        let matrix = open_matrix(&config)?;
        debug!(elapsed = ?self.start.elapsed(), "open_matrix");

        Ok(Session {
            state_path: config.state,
            matrix,
        })
    }

    /// Like `open_session`, but a state file is required to persist changes
    pub fn open_session_for_update(&self) -> Result<Session> {
        let session = self.open_session()?;
        if session.state_path.is_none() {
            bail_usage!("this command changes the selection; pass --state or set `state` in the config file");
        }
        Ok(session)
    }
}

/// A loaded calculator session
pub struct Session {
    pub state_path: Option<PathBuf>,
    pub matrix: SelectionMatrix,
}

impl Session {
    /// Persist the current selections to the state file, if one is configured
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.state_path {
            SessionState::from_matrix(&self.matrix).save(path)?;
        }
        Ok(())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("scalecalc {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Subject scaling calculator: pick subjects and years with scaling data.");
        println!();
        println!("Run `scalecalc --help` for usage information.");
        Ok(())
    }
}
