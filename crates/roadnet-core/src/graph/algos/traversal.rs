use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::algos::shared::require_vertex;
use crate::graph::WeightedGraph;

/// Breadth-first visitation order from `start`.
///
/// Covers only the component containing `start`.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn bfs(graph: &WeightedGraph, start: &str) -> Result<Vec<String>> {
    require_vertex(graph, start)?;

    let mut order = vec![start.to_string()];
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut queue: VecDeque<&str> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current).keys() {
            if visited.insert(neighbor.as_str()) {
                order.push(neighbor.clone());
                queue.push_back(neighbor.as_str());
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs_complete");
    Ok(order)
}

/// Depth-first visitation order from `start`.
///
/// Recursion depth is bounded by the size of the component.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn dfs(graph: &WeightedGraph, start: &str) -> Result<Vec<String>> {
    require_vertex(graph, start)?;

    let mut order = Vec::new();
    let mut visited = HashSet::new();
    dfs_visit(graph, start, &mut visited, &mut order);

    tracing::debug!(visited = order.len(), "dfs_complete");
    Ok(order)
}

fn dfs_visit<'g>(
    graph: &'g WeightedGraph,
    current: &'g str,
    visited: &mut HashSet<&'g str>,
    order: &mut Vec<String>,
) {
    visited.insert(current);
    order.push(current.to_string());

    for neighbor in graph.neighbors(current).keys() {
        if !visited.contains(neighbor.as_str()) {
            dfs_visit(graph, neighbor, visited, order);
        }
    }
}
