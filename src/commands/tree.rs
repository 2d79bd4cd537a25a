//! `roadnet prim` and `roadnet kruskal`

use crate::cli::{Cli, OutputFormat};
use crate::commands::output::print_json;
use roadnet_core::error::Result;
use roadnet_core::graph::{kruskal, prim, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAlgorithm {
    Prim,
    Kruskal,
}

pub fn execute(
    cli: &Cli,
    graph: &WeightedGraph,
    algorithm: TreeAlgorithm,
    allow_partial: bool,
) -> Result<()> {
    let tree = match algorithm {
        TreeAlgorithm::Prim => prim(graph)?,
        TreeAlgorithm::Kruskal => kruskal(graph)?,
    };
    if !allow_partial {
        tree.ensure_spanning(graph)?;
    } else if !tree.spans(graph) {
        tracing::warn!(
            accepted = tree.edges.len(),
            cities = graph.vertex_count(),
            "partial_spanning_tree"
        );
    }

    match cli.format {
        OutputFormat::Json => print_json(&tree)?,
        OutputFormat::Human => {
            for edge in &tree.edges {
                println!("{} - {}: {} km", edge.source, edge.target, edge.weight);
            }
            if !cli.quiet {
                println!();
            }
            println!("total: {} km", tree.total_cost);
        }
    }
    Ok(())
}
