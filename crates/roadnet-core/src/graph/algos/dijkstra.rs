use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use crate::error::Result;
use crate::graph::algos::shared::{rebuild_path, require_vertex};
use crate::graph::types::{checked_extend, Distance, ShortestPath};
use crate::graph::WeightedGraph;

/// Min-heap entry ordered by tentative distance, then by insertion order so
/// that equal distances pop first-in first-out
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub city: String,
    pub distance: Distance,
    pub sequence: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// State tracked during the search
struct DijkstraState {
    distances: HashMap<String, Distance>,
    predecessors: HashMap<String, String>,
    explored: BTreeSet<String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_sequence: u64,
}

impl DijkstraState {
    fn new(start: &str) -> Self {
        let mut state = Self {
            distances: HashMap::from([(start.to_string(), 0)]),
            predecessors: HashMap::new(),
            explored: BTreeSet::new(),
            heap: BinaryHeap::new(),
            next_sequence: 0,
        };
        state.push(start.to_string(), 0);
        state
    }

    fn push(&mut self, city: String, distance: Distance) {
        self.heap.push(Reverse(HeapEntry {
            city,
            distance,
            sequence: self.next_sequence,
        }));
        self.next_sequence += 1;
    }

    /// Unseen cities count as infinitely far
    fn distance_to(&self, city: &str) -> Option<Distance> {
        self.distances.get(city).copied()
    }

    fn relax(&mut self, graph: &WeightedGraph, current: &str, current_distance: Distance) {
        for (neighbor, weight) in graph.neighbors(current) {
            let Some(candidate) = checked_extend(current_distance, Distance::from(*weight)) else {
                continue;
            };
            if self
                .distance_to(neighbor)
                .is_none_or(|known| candidate < known)
            {
                self.distances.insert(neighbor.clone(), candidate);
                self.predecessors
                    .insert(neighbor.clone(), current.to_string());
                self.push(neighbor.clone(), candidate);
            }
        }
    }
}

/// Shortest road route from `start` to `end`.
///
/// Stops as soon as `end` is popped from the queue. An unreachable `end`
/// produces an empty route with no distance rather than an error.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn dijkstra(graph: &WeightedGraph, start: &str, end: &str) -> Result<ShortestPath> {
    require_vertex(graph, start)?;
    require_vertex(graph, end)?;

    let mut state = DijkstraState::new(start);

    while let Some(Reverse(HeapEntry { city, distance, .. })) = state.heap.pop() {
        if state.explored.contains(&city) {
            continue;
        }
        if city == end {
            break;
        }
        state.explored.insert(city.clone());
        state.relax(graph, &city, distance);
    }

    let Some(total) = state.distance_to(end) else {
        tracing::debug!(explored = state.explored.len(), "dijkstra_unreachable");
        return Ok(ShortestPath {
            route: Vec::new(),
            total_distance: None,
            explored: state.explored,
        });
    };

    let route = rebuild_path(&state.predecessors, end);
    tracing::debug!(
        explored = state.explored.len(),
        distance = total,
        hops = route.len().saturating_sub(1),
        "dijkstra_complete"
    );

    Ok(ShortestPath {
        route,
        total_distance: Some(total),
        explored: state.explored,
    })
}
