use crate::error::Result;
use crate::graph::algos::shared::require_vertex;
use crate::graph::types::{Cycle, Distance};
use crate::graph::WeightedGraph;

/// Backtracking state shared by every recursive step
struct CycleSearch<'g> {
    graph: &'g WeightedGraph,
    start: &'g str,
    max_nodes: usize,
    path: Vec<&'g str>,
    found: Vec<Cycle>,
}

impl<'g> CycleSearch<'g> {
    fn record(&mut self, total: Distance) {
        self.found.push(Cycle {
            cycle: self.path.iter().map(|c| c.to_string()).collect(),
            total_distance: total,
        });
    }

    /// Can the walk step onto `next` from its current end?
    fn may_enter(&self, next: &str) -> bool {
        if next == self.start {
            // closing needs at least three distinct cities on the path
            return self.path.len() >= 3;
        }
        !self.path.contains(&next)
    }

    fn explore(&mut self, current: &'g str, total: Distance) {
        if current == self.start && self.path.len() > 2 {
            self.record(total);
            return;
        }
        if self.path.len() >= self.max_nodes {
            return;
        }

        let graph = self.graph;
        for (next, weight) in graph.neighbors(current) {
            if !self.may_enter(next) {
                continue;
            }
            let Some(extended) = total.checked_add(Distance::from(*weight)) else {
                continue;
            };
            self.path.push(next);
            self.explore(next, extended);
            self.path.pop();
        }
    }
}

/// Every simple cycle through `start` whose walk, counting the closing
/// return to `start`, has at most `max_nodes` entries.
///
/// Both directions of the same cycle are reported. The search is exponential
/// in `max_nodes`, so keep it small.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn find_cycles(graph: &WeightedGraph, start: &str, max_nodes: usize) -> Result<Vec<Cycle>> {
    require_vertex(graph, start)?;

    let mut search = CycleSearch {
        graph,
        start,
        max_nodes,
        path: vec![start],
        found: Vec::new(),
    };
    search.explore(start, 0);

    tracing::debug!(cycles = search.found.len(), "cycles_complete");
    Ok(search.found)
}
