//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::dispatch::trace_command;
use convo_notes_core::config::ConverterConfig;
use convo_notes_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Resolve `--config`, the user config file, or the built-in defaults
    pub fn load_config(&self) -> Result<ConverterConfig> {
        let config = ConverterConfig::resolve(self.cli.config.as_deref())?;
        trace_command!(self.cli, self.start, "load_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Convert(args) => commands::convert::execute(ctx, args),
            Commands::Classify(args) => commands::classify::execute(ctx, args),
            Commands::Index(args) => commands::index::execute(ctx, args),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("convo-notes {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Converts AI conversation transcripts into knowledge-base notes.");
        println!();
        println!("Run `convo-notes --help` for usage information.");
        Ok(())
    }
}
