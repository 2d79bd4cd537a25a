//! `roadnet cycles`

use crate::cli::{Cli, OutputFormat};
use crate::commands::output::{format_route, print_json};
use roadnet_core::error::{Result, RoadnetError};
use roadnet_core::graph::{find_cycles, WeightedGraph};

/// Refuse node bounds too large for the exponential search
pub fn check_node_limit(max_nodes: usize, limit: usize) -> Result<()> {
    if max_nodes > limit {
        return Err(RoadnetError::invalid_value(
            "max nodes",
            format!("{} exceeds limits.max_cycle_nodes ({})", max_nodes, limit),
        ));
    }
    Ok(())
}

pub fn execute(cli: &Cli, graph: &WeightedGraph, start: &str, max_nodes: usize) -> Result<()> {
    let cycles = find_cycles(graph, start, max_nodes)?;

    match cli.format {
        OutputFormat::Json => print_json(&cycles)?,
        OutputFormat::Human => {
            if cycles.is_empty() {
                println!("no cycles through {} within {} nodes", start, max_nodes);
            }
            for cycle in &cycles {
                println!("{} ({} km)", format_route(&cycle.cycle), cycle.total_distance);
            }
        }
    }
    Ok(())
}
