//! Command implementations for all netpath commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use netpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Save(args) => {
                let store = ctx.open_store()?;
                commands::save::execute(ctx.cli, &store, args)
            }
            Commands::Load { name } => {
                let store = ctx.open_store()?;
                commands::load::execute(ctx.cli, &store, name)
            }
            Commands::List => {
                let store = ctx.open_store()?;
                commands::list::execute(ctx.cli, &store)
            }
            Commands::Path(args) => {
                let store = ctx.open_store()?;
                commands::path::execute(ctx.cli, &store, args)
            }
            Commands::Serve(args) => {
                let store = ctx.open_store()?;
                commands::serve::execute(ctx.cli, &ctx.config, store, args)
            }
        };

        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
