//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::parse_max_nodes;

/// A single city to start from.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Starting city
    pub start: String,
}

/// A pair of cities.
#[derive(Args, Debug)]
pub struct PairArgs {
    /// Origin city
    pub from: String,

    /// Destination city
    pub to: String,
}

/// Arguments for the bounded-path command.
#[derive(Args, Debug)]
pub struct BoundedPathArgs {
    /// Origin city
    pub from: String,

    /// Destination city
    pub to: String,

    /// Maximum number of cities on the route, endpoints included
    /// (default: search.default_max_nodes)
    #[arg(long, short = 'n', value_parser = parse_max_nodes)]
    pub max_nodes: Option<usize>,
}

/// Arguments for the prim and kruskal commands.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Print the partial tree of a disconnected graph instead of failing
    #[arg(long)]
    pub allow_partial: bool,
}

/// Arguments for the exact-tour command.
#[derive(Args, Debug)]
pub struct ExactTourArgs {
    /// Cities to visit; the first one is the origin
    #[arg(required = true, num_args = 1..)]
    pub cities: Vec<String>,
}

/// Arguments for the cycles command.
#[derive(Args, Debug)]
pub struct CyclesArgs {
    /// City every cycle passes through
    pub start: String,

    /// Maximum walk length, counting the return to the start
    /// (default: search.default_max_nodes)
    #[arg(long, short = 'n', value_parser = parse_max_nodes)]
    pub max_nodes: Option<usize>,
}

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Write the snapshot to a file (.json, .yaml, .yml or .toml) instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
