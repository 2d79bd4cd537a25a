//! `roadnet greedy-tour` and `roadnet exact-tour`

use crate::cli::{Cli, OutputFormat};
use crate::commands::output::{format_route, print_json, NO_ROUTE};
use roadnet_core::error::{Result, RoadnetError};
use roadnet_core::graph::{exact_tour, greedy_tour, Tour, WeightedGraph};

/// Refuse city lists too large for the factorial search
pub fn check_city_limit(cities: usize, limit: usize) -> Result<()> {
    if cities > limit {
        return Err(RoadnetError::invalid_value(
            "cities",
            format!("{} exceeds limits.max_tour_cities ({})", cities, limit),
        ));
    }
    Ok(())
}

pub fn execute_greedy(cli: &Cli, graph: &WeightedGraph, start: &str) -> Result<()> {
    let tour = greedy_tour(graph, start)?;
    print_tour(cli, &tour)
}

pub fn execute_exact(cli: &Cli, graph: &WeightedGraph, cities: &[String]) -> Result<()> {
    match exact_tour(graph, cities)? {
        Some(tour) => print_tour(cli, &tour),
        None => {
            match cli.format {
                OutputFormat::Json => print_json(&NO_ROUTE)?,
                OutputFormat::Human => println!("no tour through {}", cities.join(", ")),
            }
            Ok(())
        }
    }
}

fn print_tour(cli: &Cli, tour: &Tour) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(tour)?,
        OutputFormat::Human => {
            println!("{}", format_route(&tour.route));
            println!("distance: {} km", tour.total_distance);
            if !cli.quiet {
                if !tour.complete {
                    println!("stopped early: no road to an unvisited city");
                }
                if !tour.closed {
                    println!("open route: no road back to {}", tour.route[0]);
                }
            }
        }
    }
    Ok(())
}
