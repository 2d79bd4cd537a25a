use std::collections::HashMap;

use crate::error::{Result, RoadnetError};
use crate::graph::WeightedGraph;

/// Fail with `UnknownVertex` unless `city` is in the graph
pub fn require_vertex(graph: &WeightedGraph, city: &str) -> Result<()> {
    if !graph.contains(city) {
        crate::bail_unknown_vertex!(city);
    }
    Ok(())
}

/// Fail with `EmptyGraph` when there is nothing to search
pub fn require_non_empty(graph: &WeightedGraph) -> Result<()> {
    if graph.is_empty() {
        return Err(RoadnetError::EmptyGraph);
    }
    Ok(())
}

/// Positional index for every city, in vertex iteration order
pub fn index_vertices(graph: &WeightedGraph) -> (Vec<&str>, HashMap<&str, usize>) {
    let names: Vec<&str> = graph.vertices().collect();
    let index = names.iter().enumerate().map(|(i, name)| (*name, i)).collect();
    (names, index)
}

/// Walk a predecessor map from `end` back to its root and return the path
/// in forward order
pub fn rebuild_path(predecessors: &HashMap<String, String>, end: &str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut step = end;
    while let Some(previous) = predecessors.get(step) {
        path.push(previous.clone());
        step = previous.as_str();
    }
    path.reverse();
    path
}
