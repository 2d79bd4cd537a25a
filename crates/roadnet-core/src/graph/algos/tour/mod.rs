//! Travelling-salesman style tours: a nearest-neighbour heuristic over the
//! whole graph and an exact branch-and-bound solver over a chosen subset.

pub mod exact;
pub mod greedy;

pub use exact::exact_tour;
pub use greedy::greedy_tour;
