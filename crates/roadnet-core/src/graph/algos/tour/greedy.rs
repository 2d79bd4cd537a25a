use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::algos::shared::require_vertex;
use crate::graph::types::{Distance, Tour, Weight};
use crate::graph::WeightedGraph;

/// Closest unvisited city with a real road from `current`.
///
/// `unvisited` iterates in label order and only a strictly smaller weight
/// replaces the pick, so ties go to the smallest label.
fn nearest<'g>(
    graph: &'g WeightedGraph,
    current: &str,
    unvisited: &BTreeSet<&'g str>,
) -> Option<(&'g str, Weight)> {
    let mut best: Option<(&'g str, Weight)> = None;
    for &candidate in unvisited {
        let Some(weight) = graph.edge(current, candidate) else {
            continue;
        };
        if best.is_none_or(|(_, known)| weight < known) {
            best = Some((candidate, weight));
        }
    }
    best
}

/// Nearest-neighbour tour over every city, starting at `start`.
///
/// When no unvisited city is reachable from the current position the route
/// stops early and `complete` is false. The route is closed back to `start`
/// only if a road for the return leg exists.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn greedy_tour(graph: &WeightedGraph, start: &str) -> Result<Tour> {
    require_vertex(graph, start)?;

    let mut unvisited: BTreeSet<&str> = graph.vertices().filter(|c| *c != start).collect();
    let mut route = vec![start.to_string()];
    let mut total: Distance = 0;
    let mut current = start.to_string();

    while !unvisited.is_empty() {
        let Some((next, weight)) = nearest(graph, &current, &unvisited) else {
            tracing::debug!(current = %current, remaining = unvisited.len(), "greedy_tour_stuck");
            break;
        };
        unvisited.remove(next);
        route.push(next.to_string());
        total = total.saturating_add(Distance::from(weight));
        current = next.to_string();
    }

    let complete = unvisited.is_empty();
    let closed = match graph.edge(&current, start) {
        Some(weight) => {
            total = total.saturating_add(Distance::from(weight));
            route.push(start.to_string());
            true
        }
        None => false,
    };

    tracing::debug!(
        cities = route.len(),
        distance = total,
        complete,
        closed,
        "greedy_tour_complete"
    );
    Ok(Tour {
        route,
        total_distance: total,
        closed,
        complete,
    })
}
