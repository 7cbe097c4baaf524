//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use netpath_core::config::Config;
use netpath_core::error::Result;
use netpath_core::store::FileStore;

/// Resolve the store directory: `--store`/`NETPATH_STORE` first, then config
pub fn resolve_store_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.store.clone().unwrap_or_else(|| config.store_dir())
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn store_dir(&self) -> PathBuf {
        resolve_store_dir(self.cli, &self.config)
    }

    pub fn open_store(&self) -> Result<FileStore> {
        let store = FileStore::open(&self.store_dir())?;
        tracing::debug!(elapsed = ?self.start.elapsed(), root = %store.root().display(), "open_store");
        Ok(store)
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
        println!("netpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Design weighted networks and query shortest paths.");
        println!();
        println!("Run `netpath --help` for usage information.");
        Ok(())
    }
}
