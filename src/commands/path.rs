//! `roadnet dijkstra`, `roadnet shortest-path` and `roadnet bounded-path`

use crate::cli::{Cli, OutputFormat};
use crate::commands::output::{format_route, print_json, NO_ROUTE};
use roadnet_core::error::Result;
use roadnet_core::graph::{bounded_shortest_path, dijkstra, shortest_path_dp, Route, WeightedGraph};

pub fn execute_dijkstra(cli: &Cli, graph: &WeightedGraph, from: &str, to: &str) -> Result<()> {
    let result = dijkstra(graph, from, to)?;

    match cli.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => match result.total_distance {
            Some(distance) => {
                println!("{}", format_route(&result.route));
                println!("distance: {} km", distance);
                if !cli.quiet {
                    println!("explored: {} cities", result.explored.len());
                }
            }
            None => println!("no route from {} to {}", from, to),
        },
    }
    Ok(())
}

pub fn execute_shortest_path(cli: &Cli, graph: &WeightedGraph, from: &str, to: &str) -> Result<()> {
    let route = shortest_path_dp(graph, from, to)?;
    print_route(cli, route.as_ref(), from, to)
}

pub fn execute_bounded(
    cli: &Cli,
    graph: &WeightedGraph,
    from: &str,
    to: &str,
    max_nodes: usize,
) -> Result<()> {
    let route = bounded_shortest_path(graph, from, to, max_nodes)?;
    if route.is_none() && cli.format == OutputFormat::Human {
        println!(
            "no route from {} to {} within {} cities",
            from, to, max_nodes
        );
        return Ok(());
    }
    print_route(cli, route.as_ref(), from, to)
}

fn print_route(cli: &Cli, route: Option<&Route>, from: &str, to: &str) -> Result<()> {
    match (cli.format, route) {
        (OutputFormat::Json, Some(route)) => print_json(route)?,
        (OutputFormat::Json, None) => print_json(&NO_ROUTE)?,
        (OutputFormat::Human, Some(route)) => {
            println!("{}", format_route(&route.route));
            println!("distance: {} km", route.total_distance);
        }
        (OutputFormat::Human, None) => println!("no route from {} to {}", from, to),
    }
    Ok(())
}
