//! CLI argument parsing for roadnet
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{
    BoundedPathArgs, CyclesArgs, ExactTourArgs, PairArgs, SampleArgs, StartArgs, TreeArgs,
};
use parse::parse_output_format;
pub use roadnet_core::format::OutputFormat;

/// Roadnet - route, tree and tour algorithms over a road network
#[derive(Parser, Debug)]
#[command(name = "roadnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Road snapshot to load (.json, .yaml, .yml or .toml); defaults to the sample network
    #[arg(long, short, global = true, env = "ROADNET_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Configuration file (default: ./roadnet.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level roadnet commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every city in name order
    Cities,

    /// List every road once
    Roads,

    /// Breadth-first visit order from a city
    Bfs(StartArgs),

    /// Depth-first visit order from a city
    Dfs(StartArgs),

    /// Shortest route between two cities (Dijkstra)
    Dijkstra(PairArgs),

    /// Shortest route between two cities (dynamic programming, no bound)
    ShortestPath(PairArgs),

    /// Cheapest route that visits at most N cities
    BoundedPath(BoundedPathArgs),

    /// Minimum spanning tree grown from one city (Prim)
    Prim(TreeArgs),

    /// Minimum spanning tree from sorted roads (Kruskal)
    Kruskal(TreeArgs),

    /// Nearest-neighbour tour from a city
    GreedyTour(StartArgs),

    /// Optimal closed tour through the given cities (branch and bound)
    ExactTour(ExactTourArgs),

    /// Simple cycles through a city
    Cycles(CyclesArgs),

    /// Other cities ordered by direct road distance
    SortDistance(StartArgs),

    /// Print or write the built-in sample network
    Sample(SampleArgs),
}
