//! Command dispatch logic for convo-notes

use std::time::Instant;

use crate::cli::Cli;
use convo_notes_core::error::Result;

mod command;
mod macros;

pub use command::CommandContext;
pub(crate) use macros::trace_command;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
