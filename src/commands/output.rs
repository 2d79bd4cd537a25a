//! Shared rendering helpers for command output

use serde::Serialize;

use roadnet_core::error::Result;
use roadnet_core::graph::CityDistance;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Route as `A -> B -> C`
pub fn format_route(route: &[String]) -> String {
    route.join(" -> ")
}

/// Direct road distance in km, `-` when there is no road
pub fn format_distance(entry: &CityDistance) -> String {
    if entry.has_road() {
        format!("{} km", entry.distance)
    } else {
        "-".to_string()
    }
}

/// JSON shape for a route that does not exist
#[derive(Serialize)]
pub struct NoRoute {
    pub route: [String; 0],
    pub total_distance: i64,
}

pub const NO_ROUTE: NoRoute = NoRoute {
    route: [],
    total_distance: -1,
};
