use std::collections::BTreeMap;

use crate::error::Result;
use crate::graph::types::{Distance, Weight, NO_EDGE};

static NO_NEIGHBORS: BTreeMap<String, Weight> = BTreeMap::new();

/// Undirected weighted graph keyed by city name.
///
/// Every road is stored once per direction with the same weight. Ordered maps
/// keep neighbour iteration deterministic, which the traversal and tie-break
/// rules of the algorithms rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    adjacency: BTreeMap<String, BTreeMap<String, Weight>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(source, target, weight)` triples
    pub fn from_edges<I, S>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, Weight)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Insert a road in both directions; a repeated pair keeps the last weight
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: Weight,
    ) -> Result<()> {
        let source = source.into();
        let target = target.into();
        if source == target {
            crate::bail_invalid!("road", format!("self loop on {}", source));
        }

        self.adjacency
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), weight);
        self.adjacency.entry(target).or_default().insert(source, weight);
        Ok(())
    }

    /// Register a city even if no road touches it
    pub fn add_vertex(&mut self, name: impl Into<String>) {
        self.adjacency.entry(name.into()).or_default();
    }

    /// Neighbours of `city`, empty when the city is unknown
    pub fn neighbors(&self, city: &str) -> &BTreeMap<String, Weight> {
        self.adjacency.get(city).unwrap_or(&NO_NEIGHBORS)
    }

    /// City names in sorted order
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Direct road weight, or `NO_EDGE` if there is none
    pub fn weight(&self, source: &str, target: &str) -> Distance {
        self.edge(source, target)
            .map(Distance::from)
            .unwrap_or(NO_EDGE)
    }

    /// Direct road weight, if the road exists
    pub fn edge(&self, source: &str, target: &str) -> Option<Weight> {
        self.adjacency.get(source)?.get(target).copied()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected roads
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Each undirected road once, with `source < target`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(source, neighbors)| {
            neighbors
                .iter()
                .filter(move |(target, _)| source.as_str() < target.as_str())
                .map(move |(target, weight)| (source.as_str(), target.as_str(), *weight))
        })
    }
}
