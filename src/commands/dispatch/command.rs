//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use roadnet_core::config::RoadnetConfig;
use roadnet_core::error::{Result, RoadnetError};
use roadnet_core::graph::WeightedGraph;
use roadnet_core::snapshot::{GraphSource, RoadSnapshot, SnapshotFile};

use super::trace_command;

/// Pick the graph source: `--graph`, then the configured snapshot, then the sample
pub fn graph_source(cli: &Cli, config: &RoadnetConfig) -> Box<dyn GraphSource> {
    match cli.graph.clone().or_else(|| config.graph_path()) {
        Some(path) => Box::new(SnapshotFile::new(path)),
        None => Box::new(RoadSnapshot::sample()),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a RoadnetConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a RoadnetConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the road network; an empty network cannot answer any query
    pub fn load_graph(&self) -> Result<WeightedGraph> {
        let graph = graph_source(self.cli, self.config).load_graph()?;
        trace_command!(self.cli, self.start, "load_graph");
        if graph.is_empty() {
            return Err(RoadnetError::EmptyGraph);
        }
        Ok(graph)
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
        println!("roadnet {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route, tree and tour algorithms over a road network.");
        println!();
        println!("Run `roadnet --help` for usage information.");
        Ok(())
    }
}
