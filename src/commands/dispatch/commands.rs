//! Command implementations for all scalecalc commands

use scalecalc_core::error::Result;
use scalecalc_core::selection::SelectionOp;
use scalecalc_core::trace_time;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{list, prune, show, status, toggle};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show => {
                let session = ctx.open_session()?;
                show::execute(ctx.cli, &session.matrix)
            }
            Commands::Status { subject, year } => {
                let session = ctx.open_session()?;
                status::execute(ctx.cli, &session.matrix, subject, year)
            }
            Commands::List => {
                let session = ctx.open_session()?;
                list::execute(ctx.cli, &session.matrix)
            }
            Commands::Toggle { command } => {
                let mut session = ctx.open_session_for_update()?;
                let op = SelectionOp::from(command);
                toggle::execute(ctx.cli, &mut session.matrix, &op)?;
                session.save()?;
                trace_time!(ctx.start, "toggle");
                Ok(())
            }
            Commands::Clear => {
                let mut session = ctx.open_session_for_update()?;
                toggle::execute(ctx.cli, &mut session.matrix, &SelectionOp::ClearAll)?;
                session.save()?;
                trace_time!(ctx.start, "clear");
                Ok(())
            }
            Commands::Prune => {
                let mut session = ctx.open_session_for_update()?;
                prune::execute(ctx.cli, &mut session.matrix)?;
                session.save()?;
                trace_time!(ctx.start, "prune");
                Ok(())
            }
        }
    }
}
