use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::error::{Result, RoadnetError};
use crate::graph::algos::disjoint_set::DisjointSet;
use crate::graph::algos::shared::{index_vertices, require_non_empty};
use crate::graph::types::{Distance, SpanningTree, TreeEdge, Weight};
use crate::graph::WeightedGraph;

impl SpanningTree {
    /// Number of edges a spanning tree of `graph` must have
    pub fn required_edges(graph: &WeightedGraph) -> usize {
        graph.vertex_count().saturating_sub(1)
    }

    /// True when the tree reaches every city of `graph`
    pub fn spans(&self, graph: &WeightedGraph) -> bool {
        self.edges.len() == Self::required_edges(graph)
    }

    /// Fail with `DisconnectedGraph` when the tree stopped short
    pub fn ensure_spanning(&self, graph: &WeightedGraph) -> Result<()> {
        if self.spans(graph) {
            return Ok(());
        }
        Err(RoadnetError::DisconnectedGraph {
            accepted: self.edges.len(),
            required: Self::required_edges(graph),
        })
    }

    fn accept(&mut self, source: &str, target: &str, weight: Weight) {
        self.edges.push(TreeEdge {
            source: source.to_string(),
            target: target.to_string(),
            weight,
        });
        self.total_cost += Distance::from(weight);
    }

    fn empty() -> Self {
        SpanningTree {
            edges: Vec::new(),
            total_cost: 0,
        }
    }
}

/// Frontier edge; ties on weight pop in insertion order
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEdge<'g> {
    weight: Weight,
    sequence: u64,
    source: &'g str,
    target: &'g str,
}

/// Pending frontier edges leaving the tree grown so far
struct PrimFrontier<'g> {
    heap: BinaryHeap<Reverse<FrontierEdge<'g>>>,
    next_sequence: u64,
}

impl<'g> PrimFrontier<'g> {
    /// Queue every road from `city` to a city outside the tree
    fn extend(&mut self, graph: &'g WeightedGraph, city: &'g str, visited: &HashSet<&'g str>) {
        for (target, weight) in graph.neighbors(city) {
            if visited.contains(target.as_str()) {
                continue;
            }
            self.heap.push(Reverse(FrontierEdge {
                weight: *weight,
                sequence: self.next_sequence,
                source: city,
                target,
            }));
            self.next_sequence += 1;
        }
    }
}

/// Minimum spanning tree grown from the first city with a priority queue.
///
/// A disconnected graph yields the tree of the first city's component only;
/// check it with [`SpanningTree::ensure_spanning`].
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn prim(graph: &WeightedGraph) -> Result<SpanningTree> {
    let Some(start) = graph.vertices().next() else {
        return Err(RoadnetError::EmptyGraph);
    };

    let mut tree = SpanningTree::empty();
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut frontier = PrimFrontier {
        heap: BinaryHeap::new(),
        next_sequence: 0,
    };
    frontier.extend(graph, start, &visited);

    while visited.len() < graph.vertex_count() {
        let Some(Reverse(edge)) = frontier.heap.pop() else {
            break;
        };
        if !visited.insert(edge.target) {
            continue;
        }
        tree.accept(edge.source, edge.target, edge.weight);
        frontier.extend(graph, edge.target, &visited);
    }

    tracing::debug!(
        edges = tree.edges.len(),
        total_cost = tree.total_cost,
        "prim_complete"
    );
    Ok(tree)
}

/// Minimum spanning tree (forest, if disconnected) from edges sorted by weight.
///
/// Each road is considered once in `source < target` order; the stable sort
/// keeps that order among equal weights.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn kruskal(graph: &WeightedGraph) -> Result<SpanningTree> {
    require_non_empty(graph)?;

    let (names, index) = index_vertices(graph);
    let mut candidates: Vec<(&str, &str, Weight)> = graph.edges().collect();
    candidates.sort_by_key(|(_, _, weight)| *weight);

    let required = names.len() - 1;
    let mut sets = DisjointSet::new(names.len());
    let mut tree = SpanningTree::empty();

    for (source, target, weight) in candidates {
        if tree.edges.len() == required {
            break;
        }
        if sets.union(index[source], index[target]) {
            tree.accept(source, target, weight);
        }
    }

    tracing::debug!(
        edges = tree.edges.len(),
        total_cost = tree.total_cost,
        "kruskal_complete"
    );
    Ok(tree)
}
