//! Command dispatch logic for roadnet

use std::time::Instant;

use crate::cli::Cli;
use roadnet_core::config::RoadnetConfig;
use roadnet_core::error::{Result, RoadnetError};
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| RoadnetError::Other(format!("failed to read working directory: {}", e)))?;
    let config = RoadnetConfig::resolve(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
