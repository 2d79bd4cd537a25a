//! Minimum-cost path using a bounded number of roads.
//!
//! `dp[k][v]` holds the cheapest way to reach `v` from the start with exactly
//! `k` roads; the answer is the best `dp[k][end]` over every allowed `k`.

use crate::error::Result;
use crate::graph::algos::shared::{index_vertices, require_vertex};
use crate::graph::types::{checked_extend, Distance, Route, DP_INFINITY};
use crate::graph::WeightedGraph;

/// Exact-edge-count tables
struct EdgeCountTable {
    cost: Vec<Vec<Distance>>,
    pred: Vec<Vec<Option<usize>>>,
}

impl EdgeCountTable {
    fn new(max_edges: usize, vertices: usize, start: usize) -> Self {
        let mut cost = vec![vec![DP_INFINITY; vertices]; max_edges + 1];
        cost[0][start] = 0;
        Self {
            cost,
            pred: vec![vec![None; vertices]; max_edges + 1],
        }
    }

    /// Fill layer `k` from layer `k - 1` by relaxing every directed road copy
    fn relax_layer(&mut self, k: usize, edges: &[(usize, usize, Distance)]) {
        for &(u, v, weight) in edges {
            let reached = self.cost[k - 1][u];
            if reached == DP_INFINITY {
                continue;
            }
            let Some(candidate) = checked_extend(reached, weight) else {
                continue;
            };
            if candidate < self.cost[k][v] {
                self.cost[k][v] = candidate;
                self.pred[k][v] = Some(u);
            }
        }
    }

    /// Smallest finite `cost[k][end]`, earliest `k` on ties
    fn best_layer(&self, end: usize) -> Option<(usize, Distance)> {
        self.cost
            .iter()
            .enumerate()
            .map(|(k, layer)| (k, layer[end]))
            .filter(|(_, cost)| *cost < DP_INFINITY)
            .min_by_key(|(k, cost)| (*cost, *k))
    }

    /// Walk predecessors backwards from `end` at layer `k`
    fn rebuild(&self, end: usize, k: usize) -> Option<Vec<usize>> {
        let mut path = vec![end];
        let mut current = end;
        for layer in (1..=k).rev() {
            current = self.pred[layer][current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Cheapest route from `start` to `end` visiting at most `max_nodes` cities.
///
/// `max_nodes` counts cities, so at most `max_nodes - 1` roads are used.
/// Bounds past the city count are clamped: with non-negative weights a walk
/// longer than `|V| - 1` roads never beats a simple path.
/// Returns `Ok(None)` when no route fits within the bound.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn bounded_shortest_path(
    graph: &WeightedGraph,
    start: &str,
    end: &str,
    max_nodes: usize,
) -> Result<Option<Route>> {
    require_vertex(graph, start)?;
    require_vertex(graph, end)?;
    if max_nodes == 0 {
        return Ok(None);
    }

    let (names, index) = index_vertices(graph);
    let (start_idx, end_idx) = (index[start], index[end]);
    let max_edges = (max_nodes - 1).min(names.len().saturating_sub(1));

    let edges: Vec<(usize, usize, Distance)> = names
        .iter()
        .enumerate()
        .flat_map(|(u, name)| {
            let index = &index;
            graph
                .neighbors(name)
                .iter()
                .map(move |(target, weight)| (u, index[target.as_str()], Distance::from(*weight)))
        })
        .collect();

    let mut table = EdgeCountTable::new(max_edges, names.len(), start_idx);
    for k in 1..=max_edges {
        table.relax_layer(k, &edges);
    }

    let Some((best_k, best_cost)) = table.best_layer(end_idx) else {
        tracing::debug!(max_edges, "bounded_path_not_found");
        return Ok(None);
    };
    let Some(indices) = table.rebuild(end_idx, best_k) else {
        return Ok(None);
    };

    tracing::debug!(edges_used = best_k, distance = best_cost, "bounded_path_complete");
    Ok(Some(Route {
        route: indices.into_iter().map(|i| names[i].to_string()).collect(),
        total_distance: best_cost,
    }))
}

/// Cheapest route with the bound set to every city of the graph
pub fn shortest_path_dp(graph: &WeightedGraph, start: &str, end: &str) -> Result<Option<Route>> {
    bounded_shortest_path(graph, start, end, graph.vertex_count())
}
