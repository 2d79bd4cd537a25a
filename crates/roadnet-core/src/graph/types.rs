use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Weight of a single road, in kilometres
pub type Weight = u32;

/// Accumulated route length; 64-bit so long sums cannot overflow a road weight
pub type Distance = u64;

/// Distance reported for a pair of cities with no direct road
pub const NO_EDGE: Distance = Distance::MAX;

/// Unreached marker for dynamic programming tables; stays below overflow
/// under repeated addition of road weights
pub const DP_INFINITY: Distance = Distance::MAX / 4;

/// Add a road weight to an accumulated distance, refusing anything that
/// would reach the sentinel range
pub fn checked_extend(total: Distance, weight: Distance) -> Option<Distance> {
    total.checked_add(weight).filter(|sum| *sum < DP_INFINITY)
}

/// Serialize an unreachable distance as `-1`
fn distance_or_negative<S: Serializer>(
    distance: &Option<Distance>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match distance {
        Some(d) => serializer.serialize_u64(*d),
        None => serializer.serialize_i64(-1),
    }
}

/// Serialize the `NO_EDGE` sentinel as `-1`
fn sentinel_as_negative<S: Serializer>(distance: &Distance, serializer: S) -> Result<S::Ok, S::Error> {
    if *distance == NO_EDGE {
        serializer.serialize_i64(-1)
    } else {
        serializer.serialize_u64(*distance)
    }
}

/// Single-source shortest path between two cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub route: Vec<String>,
    /// `None` when `end` is unreachable from `start`
    #[serde(serialize_with = "distance_or_negative")]
    pub total_distance: Option<Distance>,
    /// Cities settled before the search stopped
    pub explored: BTreeSet<String>,
}

impl ShortestPath {
    pub fn found(&self) -> bool {
        self.total_distance.is_some()
    }
}

/// An ordered walk with its summed weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub route: Vec<String>,
    pub total_distance: Distance,
}

/// Edge accepted into a spanning tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

/// Spanning tree (or forest, when the graph is disconnected)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<TreeEdge>,
    pub total_cost: Distance,
}

/// Tour through a set of cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    pub route: Vec<String>,
    pub total_distance: Distance,
    /// Route returns to its first city
    pub closed: bool,
    /// Every requested city was placed on the route
    pub complete: bool,
}

/// Simple cycle through a start city; the start appears first and last
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cycle {
    pub cycle: Vec<String>,
    pub total_distance: Distance,
}

/// City paired with its direct road distance from a reference city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDistance {
    pub city: String,
    /// `NO_EDGE` when no direct road exists
    #[serde(serialize_with = "sentinel_as_negative")]
    pub distance: Distance,
}

impl CityDistance {
    pub fn has_road(&self) -> bool {
        self.distance != NO_EDGE
    }
}
