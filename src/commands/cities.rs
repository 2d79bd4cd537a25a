//! `roadnet cities`, `roadnet roads` and `roadnet sort-distance`

use crate::cli::{Cli, OutputFormat};
use crate::commands::output::{format_distance, print_json};
use roadnet_core::error::Result;
use roadnet_core::graph::{sort_by_distance, sort_by_name, WeightedGraph};
use roadnet_core::snapshot::RoadSnapshot;

/// Every city, merge-sorted by name
pub fn execute_names(cli: &Cli, graph: &WeightedGraph) -> Result<()> {
    let names = sort_by_name(graph);
    match cli.format {
        OutputFormat::Json => print_json(&names)?,
        OutputFormat::Human => {
            for name in &names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

/// Every road once, plus cities without roads
pub fn execute_roads(cli: &Cli, graph: &WeightedGraph) -> Result<()> {
    let snapshot = RoadSnapshot::from_graph(graph);
    match cli.format {
        OutputFormat::Json => print_json(&snapshot)?,
        OutputFormat::Human => {
            for road in &snapshot.roads {
                println!("{} - {}: {} km", road.from, road.to, road.km);
            }
            for city in &snapshot.cities {
                println!("{} (no roads)", city);
            }
            if !cli.quiet {
                println!();
                println!(
                    "{} cities, {} roads",
                    graph.vertex_count(),
                    graph.edge_count()
                );
            }
        }
    }
    Ok(())
}

/// Other cities ordered by direct road distance from `from`
pub fn execute_by_distance(cli: &Cli, graph: &WeightedGraph, from: &str) -> Result<()> {
    let sorted = sort_by_distance(graph, from)?;
    match cli.format {
        OutputFormat::Json => print_json(&sorted)?,
        OutputFormat::Human => {
            for entry in &sorted {
                println!("{}\t{}", entry.city, format_distance(entry));
            }
        }
    }
    Ok(())
}
