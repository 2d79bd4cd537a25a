//! Exact tour over a subset of cities by branch-and-bound.
//!
//! A branch is only followed while its partial cost stays strictly below the
//! best closed tour found so far. Worst case is factorial in the number of
//! cities; callers bound the subset size.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::algos::shared::require_vertex;
use crate::graph::types::{checked_extend, Distance, Tour, DP_INFINITY, NO_EDGE};
use crate::graph::WeightedGraph;

/// Pairwise road weights restricted to the requested cities
struct DistanceMatrix {
    cells: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    fn build<S: AsRef<str>>(graph: &WeightedGraph, cities: &[S]) -> Self {
        let cells = cities
            .iter()
            .enumerate()
            .map(|(i, from)| {
                cities
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            0
                        } else {
                            graph.weight(from.as_ref(), to.as_ref())
                        }
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    /// Road weight between two subset positions, `None` when there is no road
    fn road(&self, from: usize, to: usize) -> Option<Distance> {
        let weight = self.cells[from][to];
        (weight != NO_EDGE).then_some(weight)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Search state threaded through the recursion by `&mut`
struct SearchContext {
    best_cost: Distance,
    best_path: Vec<usize>,
    visited: Vec<bool>,
    path: Vec<usize>,
    /// Partial tours that reached the branching step
    expanded: u64,
}

impl SearchContext {
    fn new(n: usize) -> Self {
        let mut visited = vec![false; n];
        visited[0] = true;
        Self {
            best_cost: DP_INFINITY,
            best_path: Vec::new(),
            visited,
            path: vec![0],
            expanded: 0,
        }
    }

    fn last(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }
}

fn branch(matrix: &DistanceMatrix, ctx: &mut SearchContext, current_cost: Distance) {
    let n = matrix.len();
    if ctx.path.len() == n {
        let Some(back) = matrix.road(ctx.last(), 0) else {
            return;
        };
        let Some(total) = checked_extend(current_cost, back) else {
            return;
        };
        if total < ctx.best_cost {
            ctx.best_cost = total;
            ctx.best_path = ctx.path.clone();
            ctx.best_path.push(0);
        }
        return;
    }

    ctx.expanded += 1;
    for next in 0..n {
        if ctx.visited[next] {
            continue;
        }
        let Some(weight) = matrix.road(ctx.last(), next) else {
            continue;
        };
        let Some(extended) = checked_extend(current_cost, weight) else {
            continue;
        };
        if extended >= ctx.best_cost {
            continue;
        }

        ctx.visited[next] = true;
        ctx.path.push(next);
        branch(matrix, ctx, extended);
        ctx.path.pop();
        ctx.visited[next] = false;
    }
}

/// Reject empty, duplicated or unknown city lists before searching
fn validate<S: AsRef<str>>(graph: &WeightedGraph, cities: &[S]) -> Result<()> {
    if cities.is_empty() {
        crate::bail_invalid!("cities", "empty list");
    }
    let mut seen = HashSet::with_capacity(cities.len());
    for city in cities {
        let city = city.as_ref();
        if !seen.insert(city) {
            crate::bail_invalid!("cities", format!("duplicate city {}", city));
        }
        require_vertex(graph, city)?;
    }
    Ok(())
}

/// Minimum-cost closed tour visiting every city in `cities` exactly once,
/// starting and ending at `cities[0]`.
///
/// Only roads between the listed cities are used. Returns `Ok(None)` when no
/// such tour exists.
#[tracing::instrument(skip(graph, cities), fields(cities = cities.len()))]
pub fn exact_tour<S: AsRef<str>>(graph: &WeightedGraph, cities: &[S]) -> Result<Option<Tour>> {
    validate(graph, cities)?;

    let matrix = DistanceMatrix::build(graph, cities);
    let mut ctx = SearchContext::new(matrix.len());
    branch(&matrix, &mut ctx, 0);

    tracing::debug!(expanded = ctx.expanded, found = !ctx.best_path.is_empty(), "exact_tour_complete");
    if ctx.best_path.is_empty() {
        return Ok(None);
    }

    Ok(Some(Tour {
        route: ctx
            .best_path
            .iter()
            .map(|&i| cities[i].as_ref().to_string())
            .collect(),
        total_distance: ctx.best_cost,
        closed: true,
        complete: true,
    }))
}
