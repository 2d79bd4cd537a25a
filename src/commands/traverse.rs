//! `roadnet bfs` and `roadnet dfs`

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::output::print_json;
use roadnet_core::error::Result;
use roadnet_core::graph::{bfs, dfs, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Breadth,
    Depth,
}

#[derive(Serialize)]
struct TraversalOutput<'a> {
    start: &'a str,
    order: Order,
    visited: Vec<String>,
}

pub fn execute(cli: &Cli, graph: &WeightedGraph, start: &str, order: Order) -> Result<()> {
    let visited = match order {
        Order::Breadth => bfs(graph, start)?,
        Order::Depth => dfs(graph, start)?,
    };

    match cli.format {
        OutputFormat::Json => print_json(&TraversalOutput {
            start,
            order,
            visited,
        })?,
        OutputFormat::Human => {
            for city in &visited {
                println!("{}", city);
            }
            if !cli.quiet && visited.len() < graph.vertex_count() {
                println!();
                println!(
                    "reached {} of {} cities",
                    visited.len(),
                    graph.vertex_count()
                );
            }
        }
    }
    Ok(())
}
