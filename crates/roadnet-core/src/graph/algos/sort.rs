use crate::error::Result;
use crate::graph::algos::shared::require_vertex;
use crate::graph::types::CityDistance;
use crate::graph::WeightedGraph;

/// Lomuto partition around the last element; returns the pivot's final index
fn partition(items: &mut [CityDistance]) -> usize {
    let pivot = items.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if items[i].distance <= items[pivot].distance {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, pivot);
    store
}

pub(crate) fn quicksort(items: &mut [CityDistance]) {
    if items.len() <= 1 {
        return;
    }
    let p = partition(items);
    let (left, right) = items.split_at_mut(p);
    quicksort(left);
    quicksort(&mut right[1..]);
}

/// Every other city paired with its direct road distance from `from`,
/// nearest first. Cities without a road sort last with `NO_EDGE`.
#[tracing::instrument(skip(graph), fields(from = %from))]
pub fn sort_by_distance(graph: &WeightedGraph, from: &str) -> Result<Vec<CityDistance>> {
    require_vertex(graph, from)?;

    let mut cities: Vec<CityDistance> = graph
        .vertices()
        .filter(|city| *city != from)
        .map(|city| CityDistance {
            city: city.to_string(),
            distance: graph.weight(from, city),
        })
        .collect();
    quicksort(&mut cities);

    tracing::debug!(cities = cities.len(), "sort_by_distance_complete");
    Ok(cities)
}

/// Stable top-down merge sort
pub(crate) fn merge_sort(items: Vec<String>) -> Vec<String> {
    if items.len() <= 1 {
        return items;
    }
    let mut left = items;
    let right = left.split_off(left.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

fn merge(left: Vec<String>, right: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // `<=` keeps equal labels in their left-side order
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged
}

/// City names in lexicographic order
pub fn sort_by_name(graph: &WeightedGraph) -> Vec<String> {
    merge_sort(graph.vertices().map(str::to_string).collect())
}
