//! Road network graph and the algorithms that run over it
//!
//! - `weighted`: undirected weighted graph keyed by city name
//! - `types`: result records returned by the algorithms
//! - `algos`: traversal, shortest path, spanning tree, tour, cycle and sort

pub mod algos;
pub mod types;
pub mod weighted;

pub use algos::{
    bfs, bounded_shortest_path, dfs, dijkstra, exact_tour, find_cycles, greedy_tour, kruskal,
    prim, shortest_path_dp, sort_by_distance, sort_by_name,
};
pub use types::{
    CityDistance, Cycle, Distance, Route, ShortestPath, SpanningTree, Tour, TreeEdge, Weight,
    DP_INFINITY, NO_EDGE,
};
pub use weighted::WeightedGraph;
