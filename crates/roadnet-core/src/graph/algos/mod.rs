//! Graph algorithm implementations
//!
//! Every algorithm is a pure function of a borrowed graph and its parameters:
//! - `traversal`: breadth-first and depth-first visit order
//! - `dijkstra`: single-pair shortest path
//! - `bounded`: shortest path limited to a number of cities
//! - `spanning`: Prim and Kruskal minimum spanning trees
//! - `cycles`: simple cycles through a start city
//! - `tour`: nearest-neighbour and branch-and-bound tours
//! - `sort`: city listings by distance and by name
//! - `shared`: validation and indexing helpers

pub mod bounded;
pub mod cycles;
pub mod dijkstra;
pub mod disjoint_set;
pub mod shared;
pub mod sort;
pub mod spanning;
pub mod tour;
pub mod traversal;

pub use bounded::{bounded_shortest_path, shortest_path_dp};
pub use cycles::find_cycles;
pub use dijkstra::dijkstra;
pub use disjoint_set::DisjointSet;
pub use sort::{sort_by_distance, sort_by_name};
pub use spanning::{kruskal, prim};
pub use tour::{exact_tour, greedy_tour};
pub use traversal::{bfs, dfs};
